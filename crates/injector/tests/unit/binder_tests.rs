//! Binder Tests
//!
//! Exercise the binding walk through hand-written `Bindable` impls, so each
//! descriptor shape (read-only, untagged, empty keys, both tags) is covered.

use injector::config::BinderConfig;
use injector::{
    BindReport, Bindable, Binder, ConflictPolicy, Error, FieldBinding, Registry, SkipReason,
};

#[derive(Default)]
struct Manual {
    injected: String,
    infected: u32,
    untouched: bool,
}

impl Bindable for Manual {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("injected", &mut self.injected).injection("manual.injected"),
            FieldBinding::new("infected", &mut self.infected).infection("manual.infected"),
            FieldBinding::new("untouched", &mut self.untouched),
        ]
    }
}

#[test]
fn test_injection_copies_registry_value_into_field() {
    let registry = Registry::new();
    registry.register("manual.injected", String::from("from registry"));

    let mut target = Manual::default();
    let report = Binder::new(registry).bind(&mut target).unwrap();

    assert_eq!(target.injected, "from registry");
    assert!(report.was_injected("injected"));
}

#[test]
fn test_infection_copies_field_into_registry() {
    let registry = Registry::new();
    registry.register("manual.infected", 1u32);

    let mut target = Manual {
        infected: 99,
        ..Manual::default()
    };
    let report = registry.inject(&mut target).unwrap();

    assert_eq!(registry.invoke_as::<u32>("manual.infected").unwrap(), Some(99));
    assert!(report.was_infected("infected"));
}

#[test]
fn test_absent_key_leaves_field_unchanged() {
    let registry = Registry::new();
    let mut target = Manual {
        injected: "original".to_string(),
        ..Manual::default()
    };

    let report = registry.inject(&mut target).unwrap();

    assert_eq!(target.injected, "original");
    assert_eq!(
        report.skip_reason("injected"),
        Some(&SkipReason::AbsentKey("manual.injected".to_string()))
    );
}

#[test]
fn test_untagged_field_is_reported() {
    let registry = Registry::new();
    let report = registry.inject(&mut Manual::default()).unwrap();

    assert_eq!(report.skip_reason("untouched"), Some(&SkipReason::Untagged));
    assert!(!registry.contains_key("untouched"));
}

#[test]
fn test_report_lists_fields_in_declaration_order() {
    let registry = Registry::new();
    registry.register("manual.injected", String::from("x"));

    let report = registry.inject(&mut Manual::default()).unwrap();

    assert_eq!(report.injected.len(), 1);
    assert_eq!(report.injected[0].field, "injected");
    assert_eq!(report.injected[0].key, "manual.injected");
    assert_eq!(report.infected.len(), 1);
    assert_eq!(report.infected[0].key, "manual.infected");
    assert_eq!(report.skipped.len(), 1);
}

struct ReadOnlyHolder {
    label: String,
}

impl Bindable for ReadOnlyHolder {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![FieldBinding::read_only("label", &self.label).injection("holder.label")]
    }
}

#[test]
fn test_read_only_field_is_not_injected() {
    let registry = Registry::new();
    registry.register("holder.label", String::from("new"));

    let mut target = ReadOnlyHolder {
        label: "old".to_string(),
    };
    let report = registry.inject(&mut target).unwrap();

    assert_eq!(target.label, "old");
    assert_eq!(report.skip_reason("label"), Some(&SkipReason::NotWritable));
}

struct ReadOnlySource {
    label: String,
}

impl Bindable for ReadOnlySource {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![FieldBinding::read_only("label", &self.label).infection("source.label")]
    }
}

#[test]
fn test_read_only_field_can_be_infected() {
    let registry = Registry::new();
    let mut source = ReadOnlySource {
        label: "exposed".to_string(),
    };

    registry.inject(&mut source).unwrap();

    assert_eq!(
        registry.invoke_as::<String>("source.label").unwrap(),
        Some("exposed".to_string())
    );
}

struct EmptyKeys {
    value: u8,
}

impl Bindable for EmptyKeys {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("value", &mut self.value)
                .injection("")
                .infection(""),
        ]
    }
}

#[test]
fn test_empty_keys_count_as_untagged() {
    let registry = Registry::new();
    registry.register("", 5u8);

    let mut target = EmptyKeys { value: 1 };
    let report = registry.inject(&mut target).unwrap();

    assert_eq!(target.value, 1);
    assert_eq!(report.skip_reason("value"), Some(&SkipReason::Untagged));
}

struct Optional {
    present: Option<String>,
    missing: Option<String>,
}

impl Bindable for Optional {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::optional("present", &mut self.present).infection("optional.present"),
            FieldBinding::optional("missing", &mut self.missing).infection("optional.missing"),
        ]
    }
}

#[test]
fn test_none_field_is_not_exposable() {
    let registry = Registry::new();
    let mut target = Optional {
        present: Some("here".to_string()),
        missing: None,
    };

    let report = registry.inject(&mut target).unwrap();

    assert_eq!(
        registry.invoke_as::<String>("optional.present").unwrap(),
        Some("here".to_string())
    );
    assert!(!registry.contains_key("optional.missing"));
    assert_eq!(
        report.skip_reason("missing"),
        Some(&SkipReason::NotExposable("optional.missing".to_string()))
    );
}

// ============================================================================
// Type mismatch
// ============================================================================

struct Sequence {
    first: String,
    second: u32,
    third: String,
}

impl Bindable for Sequence {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("first", &mut self.first).injection("seq.first"),
            FieldBinding::new("second", &mut self.second).injection("seq.second"),
            FieldBinding::new("third", &mut self.third).injection("seq.third"),
        ]
    }
}

#[test]
fn test_type_mismatch_fails_fast() {
    let registry = Registry::new();
    registry.register("seq.first", String::from("applied"));
    registry.register("seq.second", String::from("not a number"));
    registry.register("seq.third", String::from("never applied"));

    let mut target = Sequence {
        first: String::new(),
        second: 0,
        third: String::new(),
    };
    let err = registry.inject(&mut target).unwrap_err();

    match err {
        Error::FieldTypeMismatch {
            field,
            key,
            expected,
            found,
        } => {
            assert_eq!(field, "second");
            assert_eq!(key, "seq.second");
            assert_eq!(expected, "u32");
            assert_eq!(found, std::any::type_name::<String>());
        }
        other => panic!("Expected FieldTypeMismatch, got {other:?}"),
    }

    assert_eq!(target.first, "applied");
    assert_eq!(target.second, 0);
    assert!(target.third.is_empty());
}

// ============================================================================
// Conflicting tags
// ============================================================================

struct BothTags {
    writable: String,
    plain: u8,
}

impl Bindable for BothTags {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("plain", &mut self.plain).infection("both.plain"),
            FieldBinding::new("writable", &mut self.writable)
                .injection("both.in")
                .infection("both.out"),
        ]
    }
}

fn both_tags() -> BothTags {
    BothTags {
        writable: "field value".to_string(),
        plain: 3,
    }
}

#[test]
fn test_conflicting_tags_rejected_by_default() {
    let registry = Registry::new();
    let mut target = both_tags();

    let err = registry.inject(&mut target).unwrap_err();

    assert!(matches!(
        err,
        Error::ConflictingTags { ref field, ref injection, ref infection }
            if field == "writable" && injection == "both.in" && infection == "both.out"
    ));
    // Validation runs before any field is bound
    assert!(registry.is_empty());
}

#[test]
fn test_prefer_injection_skips_infection_on_absent_key() {
    let registry = Registry::new();
    let binder = Binder::new(registry.clone()).with_policy(ConflictPolicy::PreferInjection);
    let mut target = both_tags();

    let report = binder.bind(&mut target).unwrap();

    assert_eq!(target.writable, "field value");
    assert!(!registry.contains_key("both.out"));
    assert_eq!(
        report.skip_reason("writable"),
        Some(&SkipReason::AbsentKey("both.in".to_string()))
    );
}

#[test]
fn test_prefer_injection_injects_when_present() {
    let registry = Registry::new();
    registry.register("both.in", String::from("injected"));
    let binder = Binder::new(registry.clone()).with_policy(ConflictPolicy::PreferInjection);
    let mut target = both_tags();

    binder.bind(&mut target).unwrap();

    assert_eq!(target.writable, "injected");
    assert!(!registry.contains_key("both.out"));
}

struct ReadOnlyBoth {
    label: String,
}

impl Bindable for ReadOnlyBoth {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::read_only("label", &self.label)
                .injection("ro.in")
                .infection("ro.out"),
        ]
    }
}

#[test]
fn test_prefer_injection_falls_back_to_infection_when_read_only() {
    let registry = Registry::new();
    registry.register("ro.in", String::from("ignored"));
    let binder = Binder::new(registry.clone()).with_policy(ConflictPolicy::PreferInjection);
    let mut target = ReadOnlyBoth {
        label: "exposed".to_string(),
    };

    binder.bind(&mut target).unwrap();

    assert_eq!(target.label, "exposed");
    assert_eq!(
        registry.invoke_as::<String>("ro.out").unwrap(),
        Some("exposed".to_string())
    );
}

#[test]
fn test_binder_from_config_applies_policy() {
    let config = BinderConfig {
        conflict_policy: ConflictPolicy::PreferInjection,
    };
    let binder = Binder::from_config(Registry::new(), &config);

    assert_eq!(binder.policy(), ConflictPolicy::PreferInjection);
    assert!(binder.bind(&mut both_tags()).is_ok());
}

// ============================================================================
// Non-record and indirection
// ============================================================================

#[test]
fn test_non_record_targets_are_noops() {
    let registry = Registry::new();
    registry.register("existing", 1u8);

    let report = registry.inject(&mut "testing 1 2 3").unwrap();
    assert!(report.is_empty());

    let report = registry.inject(&mut 42).unwrap();
    assert_eq!(report, BindReport::default());

    assert!(registry.inject(&mut String::from("owned")).unwrap().is_empty());
    assert!(registry.inject(&mut ()).unwrap().is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_indirections_resolve_to_record() {
    let registry = Registry::new();
    registry.register("manual.injected", String::from("through pointers"));

    let mut boxed = Box::new(Manual::default());
    registry.inject(&mut &mut boxed).unwrap();
    assert_eq!(boxed.injected, "through pointers");

    let mut maybe = Some(Manual::default());
    registry.inject(&mut maybe).unwrap();
    assert_eq!(maybe.map(|m| m.injected), Some("through pointers".to_string()));
}

#[test]
fn test_none_indirection_is_noop() {
    let registry = Registry::new();
    let mut nothing: Option<Manual> = None;

    let report = registry.inject(&mut nothing).unwrap();

    assert!(report.is_empty());
    assert!(registry.is_empty());
}

#[test]
fn test_dyn_bindable_target() {
    let registry = Registry::new();
    registry.register("manual.injected", String::from("dynamic"));

    let mut target: Box<dyn Bindable> = Box::new(Manual::default());
    let report = registry.inject(&mut target).unwrap();

    assert!(report.was_injected("injected"));
}
