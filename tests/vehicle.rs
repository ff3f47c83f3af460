//! Matcher scenarios against a vehicle with two machines.
//!
//! `state` models the drive train with guarded events; `alarm_state` is a
//! namespaced machine whose states carry integer values.

use machine_matchers::builder::{
    from, from_all_except, from_any, EventBuilder, MachineBuilder, MachineSetBuilder,
};
use machine_matchers::core::{MachineSet, StateValue, Subject};
use machine_matchers::{
    capabilities, expect, handle_event, handle_events, have_state, have_states, reject_event,
    reject_events, reject_state, reject_states, respond_to_events, transition_from,
    transitions_from, ExpectationFailure, IntrospectionError, MatchOptions, MatchReport, Matcher,
    UsageError,
};
use std::collections::HashMap;
use std::sync::Arc;

struct Vehicle {
    machines: Arc<MachineSet<Vehicle>>,
    attributes: HashMap<String, StateValue>,
    passed_inspection: bool,
    auto_shop_busy: bool,
}

impl Vehicle {
    fn new() -> Self {
        Self {
            machines: Arc::new(machines()),
            attributes: HashMap::new(),
            passed_inspection: false,
            auto_shop_busy: true,
        }
    }

    fn state(&self) -> Option<StateValue> {
        self.read_attribute("state")
    }
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

#[test]
fn declares_drive_train_states() {
    let mut vehicle = Vehicle::new();

    expect(&mut vehicle)
        .to(have_states([
            "parked",
            "idling",
            "stalled",
            "first_gear",
            "second_gear",
            "third_gear",
        ]))
        .to(reject_state("flying"));
}

#[test]
fn events_by_state() {
    let mut vehicle = Vehicle::new();
    let table: [(&str, &[&str], &[&str]); 6] = [
        (
            "parked",
            &["ignite"],
            &["park", "idle", "shift_up", "shift_down", "crash", "repair"],
        ),
        (
            "idling",
            &["park", "shift_up", "crash"],
            &["ignite", "idle", "shift_down", "repair"],
        ),
        (
            "stalled",
            &["ignite", "repair"],
            &["park", "idle", "shift_up", "shift_down", "crash"],
        ),
        (
            "first_gear",
            &["park", "idle", "shift_up", "crash"],
            &["ignite", "shift_down", "repair"],
        ),
        (
            "second_gear",
            &["shift_up", "shift_down", "crash"],
            &["park", "ignite", "idle", "repair"],
        ),
        (
            "third_gear",
            &["shift_down", "crash"],
            &["park", "ignite", "idle", "shift_up", "repair"],
        ),
    ];

    for (state, handled, rejected) in table {
        expect(&mut vehicle)
            .to(handle_events(handled.iter().copied()).when(state))
            .to(reject_events(rejected.iter().copied()).when(state));
    }
}

#[test]
fn ignite_scenario() {
    let mut vehicle = Vehicle::new();

    let mut matcher = handle_event("ignite").when("parked");
    assert!(matcher.matches(&mut vehicle).unwrap());
    assert!(matcher.failure_message().is_none());

    let mut matcher = handle_event("ignite").when("idling");
    assert!(!matcher.matches(&mut vehicle).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("Expected to be able to handle events: ignite in state: idling")
    );
}

#[test]
fn forced_state_persists_after_evaluation() {
    let mut vehicle = Vehicle::new();
    assert_eq!(vehicle.state(), None);

    expect(&mut vehicle).to(reject_event("ignite").when("third_gear"));

    assert_eq!(vehicle.state(), Some(StateValue::from("third_gear")));
    expect(&mut vehicle).to(handle_event("shift_down"));
}

#[test]
fn guards_are_evaluated_on_the_subject() {
    let mut vehicle = Vehicle::new();
    vehicle.passed_inspection = true;

    expect(&mut vehicle).to(reject_event("crash").when("second_gear"));

    vehicle.passed_inspection = false;
    expect(&mut vehicle).to(handle_event("crash").when("second_gear"));
}

#[test]
fn first_matching_rule_wins() {
    let mut vehicle = Vehicle::new();

    expect(&mut vehicle).to(transition_from("stalled").to_state("stalled").on_event("repair"));

    vehicle.auto_shop_busy = false;
    expect(&mut vehicle)
        .to(transition_from("stalled").to_state("parked").on_event("repair"))
        .not_to(transition_from("stalled").to_state("stalled").on_event("repair"));
}

#[test]
fn gear_transitions() {
    let mut vehicle = Vehicle::new();

    expect(&mut vehicle)
        .to(transitions_from(["idling", "first_gear"])
            .to_state("parked")
            .on_event("park"))
        .to(transition_from("first_gear").to_state("second_gear").on_event("shift_up"))
        .to(transition_from("third_gear").to_state("second_gear").on_event("shift_down"));

    let mut matcher = transitions_from(["idling", "second_gear", "first_gear"])
        .to_state("parked")
        .on_event("park");
    assert!(!matcher.matches(&mut vehicle).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("Expected to be able to transition state from: second_gear to: parked, on_event: park")
    );
    assert_eq!(vehicle.state(), Some(StateValue::from("second_gear")));
}

#[test]
fn alarm_states_carry_values() {
    let mut vehicle = Vehicle::new();

    expect(&mut vehicle)
        .to(have_state("active").on("alarm_state").value(1))
        .to(have_state("off").on("alarm_state").value(0))
        .to(reject_states(["broken", "ringing"]).on("alarm_state"));

    let mut matcher = have_state("off").on("alarm_state").value(1);
    assert!(!matcher.matches(&mut vehicle).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("Expected off to have value 1 but was 0")
    );
}

#[test]
fn alarm_events_are_namespaced() {
    let mut vehicle = Vehicle::new();

    for state in ["active", "off"] {
        expect(&mut vehicle).to(
            handle_events(["enable_alarm", "disable_alarm"])
                .when(state)
                .on("alarm_state"),
        );
    }
    assert_eq!(
        vehicle.read_attribute("alarm_state"),
        Some(StateValue::Int(0))
    );

    let mut matcher = handle_event("enable").on("alarm_state");
    assert!(!matcher.matches(&mut vehicle).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("state_machine: alarm_state does not define events: enable (cannot handle them)")
    );
}

#[test]
fn events_of_any_machine_are_defined_on_the_subject() {
    let mut vehicle = Vehicle::new();

    expect(&mut vehicle)
        .to(handle_events(["ignite", "enable_alarm", "disable_alarm"]))
        .not_to(reject_event("enable_alarm"));

    let mut matcher = reject_event("disable_alarm");
    assert!(!matcher.matches(&mut vehicle).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("Did not expect to be able to handle events: disable_alarm in state: parked")
    );

    let mut matcher = handle_event("disable_alarm").when("idling");
    assert!(matcher.matches(&mut vehicle).unwrap());
    assert_eq!(vehicle.state(), Some(StateValue::from("idling")));
    assert_eq!(vehicle.read_attribute("alarm_state"), None);
}

#[test]
fn unknown_machine_is_a_usage_error() {
    let mut vehicle = Vehicle::new();

    let failure = expect(&mut vehicle)
        .check(have_state("armed").on("security_state"))
        .unwrap_err();

    assert_eq!(
        failure,
        ExpectationFailure::Usage(UsageError::Introspection(
            IntrospectionError::MachineNotFound {
                type_name: "Vehicle".to_string(),
                attribute: "security_state".to_string(),
            }
        ))
    );
    assert_eq!(
        failure.to_string(),
        "Vehicle does not have a state machine defined on security_state"
    );
}

#[test]
fn undefined_when_state_is_a_usage_error() {
    let mut vehicle = Vehicle::new();

    let mut matcher = handle_event("ignite").when("flying");
    let err = matcher.matches(&mut vehicle).unwrap_err();

    assert_eq!(err.to_string(), "Vehicle does not define state: flying");
    assert_eq!(vehicle.state(), None);
}

#[test]
fn options_from_json() {
    let mut vehicle = Vehicle::new();
    let options = MatchOptions::from_json(r#"{"on": "alarm_state", "value": 1}"#).unwrap();

    expect(&mut vehicle).to(have_state("active").with_options(options));
}

#[test]
fn capabilities_answer_across_machines() {
    let vehicle = Vehicle::new();

    let mut matcher = respond_to_events(["ignite", "disable_alarm"]);
    assert!(matcher.matches(&mut capabilities(&vehicle)).unwrap());

    let mut matcher = respond_to_events(["ignite", "park", "shift_up"]);
    assert!(!matcher.matches(&mut capabilities(&vehicle)).unwrap());
    assert_eq!(
        matcher.failure_message(),
        Some("Expected to be able to respond to: park, shift_up in state: parked")
    );
}

#[test]
fn negated_expectation_reports_description() {
    let mut vehicle = Vehicle::new();

    let failure = expect(&mut vehicle)
        .check_not(handle_event("ignite").when("parked"))
        .unwrap_err();

    assert_eq!(
        failure.to_string(),
        "Did not expect subject to handle :ignite when :parked"
    );
}
