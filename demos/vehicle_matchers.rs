//! Vehicle Matchers
//!
//! This example walks a two-machine vehicle through every matcher family.
//!
//! Key concepts:
//! - `expect(..).to(..)` and `.not_to(..)` chains
//! - `when` forcing a state before an event check
//! - Guards evaluated against the subject
//! - A namespaced alarm machine with integer state values
//! - Reading a failure message without panicking
//!
//! Run with: cargo run --example vehicle_matchers

use machine_matchers::builder::{
    from, from_all_except, from_any, EventBuilder, MachineBuilder, MachineSetBuilder,
};
use machine_matchers::core::{MachineSet, StateValue, Subject};
use machine_matchers::{
    capabilities, expect, handle_event, handle_events, have_state, have_states, reject_event,
    reject_events, reject_state, respond_to_events, transition_from, transitions_from,
    MatchReport, Matcher,
};
use std::collections::HashMap;
use std::sync::Arc;

struct Vehicle {
    machines: Arc<MachineSet<Vehicle>>,
    attributes: HashMap<String, StateValue>,
    passed_inspection: bool,
    auto_shop_busy: bool,
}

impl Subject for Vehicle {
    fn machines(&self) -> Arc<MachineSet<Self>> {
        Arc::clone(&self.machines)
    }

    fn read_attribute(&self, attribute: &str) -> Option<StateValue> {
        self.attributes.get(attribute).cloned()
    }

    fn write_attribute(&mut self, attribute: &str, value: StateValue) {
        self.attributes.insert(attribute.to_string(), value);
    }
}

fn machines() -> MachineSet<Vehicle> {
    let drive_train = MachineBuilder::new("state")
        .initial("parked")
        .transition("park", from(["idling", "first_gear"]).to("parked"))
        .unwrap()
        .event(
            EventBuilder::new("ignite")
                .transition(from(["stalled"]).to_same())
                .unwrap()
                .transition(from(["parked"]).to("idling"))
                .unwrap(),
        )
        .transition("idle", from(["first_gear"]).to("idling"))
        .unwrap()
        .event(
            EventBuilder::new("shift_up")
                .transition(from(["idling"]).to("first_gear"))
                .unwrap()
                .transition(from(["first_gear"]).to("second_gear"))
                .unwrap()
                .transition(from(["second_gear"]).to("third_gear"))
                .unwrap(),
        )
        .event(
            EventBuilder::new("shift_down")
                .transition(from(["third_gear"]).to("second_gear"))
                .unwrap()
                .transition(from(["second_gear"]).to("first_gear"))
                .unwrap(),
        )
        .transition(
            "crash",
            from_all_except(["parked", "stalled"])
                .to("stalled")
                .when(|v: &Vehicle| !v.passed_inspection),
        )
        .unwrap()
        .event(
            EventBuilder::new("repair")
                .transition(
                    from(["stalled"])
                        .to("parked")
                        .unless(|v: &Vehicle| v.auto_shop_busy),
                )
                .unwrap()
                .transition(from(["stalled"]).to_same())
                .unwrap(),
        );

    let alarm = MachineBuilder::new("alarm_state")
        .namespace("alarm")
        .initial("active")
        .state_with_value("active", 1)
        .state_with_value("off", 0)
        .transition("enable", from_any().to("active"))
        .unwrap()
        .transition("disable", from_any().to("off"))
        .unwrap();

    MachineSetBuilder::new()
        .machine(drive_train)
        .unwrap()
        .machine(alarm)
        .unwrap()
        .build()
}

fn main() {
    println!("=== Vehicle Matchers ===\n");

    let mut vehicle = Vehicle {
        machines: Arc::new(machines()),
        attributes: HashMap::new(),
        passed_inspection: false,
        auto_shop_busy: true,
    };

    println!("States:");
    expect(&mut vehicle)
        .to(have_states(["parked", "idling", "stalled", "first_gear"]))
        .to(reject_state("flying"));
    println!("  declares parked, idling, stalled, first_gear");
    println!("  does not declare flying\n");

    println!("Events from parked:");
    expect(&mut vehicle)
        .to(handle_event("ignite").when("parked"))
        .to(reject_events(["park", "shift_up", "repair"]).when("parked"));
    println!("  ignite is performable; park, shift_up and repair are not\n");

    println!("Guards:");
    expect(&mut vehicle).to(handle_event("crash").when("second_gear"));
    vehicle.passed_inspection = true;
    expect(&mut vehicle).to(reject_event("crash").when("second_gear"));
    println!("  crash is blocked once the vehicle passed inspection\n");

    println!("Transitions:");
    expect(&mut vehicle)
        .to(transitions_from(["idling", "first_gear"])
            .to_state("parked")
            .on_event("park"))
        .to(transition_from("stalled").to_state("stalled").on_event("repair"));
    vehicle.auto_shop_busy = false;
    expect(&mut vehicle)
        .to(transition_from("stalled").to_state("parked").on_event("repair"))
        .not_to(transition_from("stalled").to_state("stalled").on_event("repair"));
    println!("  repair stays stalled while the shop is busy, then parks\n");

    println!("Alarm machine:");
    expect(&mut vehicle)
        .to(have_state("active").on("alarm_state").value(1))
        .to(have_state("off").on("alarm_state").value(0))
        .to(handle_events(["enable_alarm", "disable_alarm"]).on("alarm_state"));
    println!("  active = 1, off = 0, namespaced events enable_alarm and disable_alarm\n");

    println!("Capabilities:");
    let mut responds = respond_to_events(["ignite", "disable_alarm"]);
    let answered = responds.matches(&mut capabilities(&vehicle)).unwrap();
    println!("  {} -> {}\n", responds.description(), answered);

    println!("A failing matcher:");
    let mut matcher = handle_event("ignite").when("idling");
    if !matcher.matches(&mut vehicle).unwrap() {
        println!("  {}", matcher.description());
        println!("  {}", matcher.failure_message().unwrap_or_default());
    }

    println!("\n=== Example Complete ===");
}
