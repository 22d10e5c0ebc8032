use super::*;
use crate::checker::test_support::FakeSyntaxChecker;
use crate::checker::{EvalContext, Outcome, compile_rules};
use crate::config::CheckConfig;
use crate::config::validation::validate_config;
use crate::scanner::memory::MemoryFiles;

fn run_preset(name: &str, files: &MemoryFiles) -> Vec<Outcome> {
    let config = load_preset(name).unwrap();
    let syntax = FakeSyntaxChecker::new();
    let ctx = EvalContext::new(files, &syntax);
    compile_rules(&config.rules)
        .unwrap()
        .iter()
        .map(|rule| rule.evaluate(&ctx))
        .collect()
}

fn outcome<'a>(outcomes: &'a [Outcome], name: &str) -> &'a Outcome {
    outcomes.iter().find(|o| o.rule_name == name).unwrap()
}

#[test]
fn every_available_preset_loads_and_validates() {
    for name in AVAILABLE_PRESETS {
        let config = load_preset(name).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(!config.rules.is_empty(), "{name} has no rules");
        validate_config(&config).unwrap_or_else(|e| panic!("{name}: {e}"));
        crate::checker::compile_rules(&config.rules).unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}

#[test]
fn expo_app_starts_with_essential_files() {
    let config = load_preset("expo-app").unwrap();

    let first = &config.rules[0];
    assert_eq!(first.name, "Essential files");
    match &first.check {
        CheckConfig::Existence { paths } => assert_eq!(
            paths,
            &vec!["package.json", "App.js", "app.json", "babel.config.js"]
        ),
        other => panic!("unexpected rule: {other:?}"),
    }
}

#[test]
fn expo_app_app_imports_keep_declaration_order() {
    let config = load_preset("expo-app").unwrap();

    let rule = config
        .rules
        .iter()
        .find(|r| r.name == "App.js imports resolve")
        .unwrap();
    match &rule.check {
        CheckConfig::CrossReference { source, references } => {
            assert_eq!(source, "App.js");
            let targets: Vec<_> = references.values().map(String::as_str).collect();
            assert_eq!(
                targets,
                vec![
                    "screens/ServerConfigScreen.js",
                    "screens/LoginScreen.js",
                    "screens/DoorListScreen.js",
                    "screens/DoorControlScreen.js",
                    "constants/theme.js"
                ]
            );
        }
        other => panic!("unexpected rule: {other:?}"),
    }
}

#[test]
fn responsive_ui_forbids_haptics_in_activity_log() {
    let config = load_preset("responsive-ui").unwrap();

    assert!(config.rules.iter().any(|r| matches!(
        &r.check,
        CheckConfig::PatternAbsence { paths, regex: true, .. }
            if paths == &vec!["screens/ActivityLogScreen.js".to_string()]
    )));
}

#[test]
fn unknown_preset_lists_available_ones() {
    let err = load_preset("django").unwrap_err().to_string();

    assert!(err.contains("Unknown preset: 'django'"));
    assert!(err.contains("expo-app, responsive-ui, premium-features"));
}

#[test]
fn preset_source_is_valid_toml_text() {
    let source = preset_source("expo-app").unwrap();
    assert!(source.contains("[[rules]]"));
    assert!(toml::from_str::<toml::Value>(source).is_ok());
}

#[test]
fn expo_app_names_each_missing_theme_export_and_navigation_element() {
    let files = MemoryFiles::new()
        .with_file(
            "constants/theme.js",
            "export const colors = {};\nexport const typography = {};\n\
             export const spacing = {};\nexport const borderRadius = {};\n",
        )
        .with_file(
            "App.js",
            "import { createStackNavigator } from '@react-navigation/stack';\n\
             import '@react-navigation/native';\n\
             const Stack = createStackNavigator();\n",
        );

    let outcomes = run_preset("expo-app", &files);

    let theme = outcome(&outcomes, "Theme exports");
    assert!(!theme.passed);
    assert_eq!(theme.failures.len(), 1);
    assert!(theme.failures[0].message.contains("export const shadows"));

    let navigation = outcome(&outcomes, "Navigation setup");
    assert!(!navigation.passed);
    assert_eq!(navigation.failures.len(), 1);
    assert!(navigation.failures[0].message.contains("NavigationContainer"));
}

#[test]
fn expo_app_theme_and_navigation_pass_on_complete_files() {
    let files = MemoryFiles::new()
        .with_file(
            "constants/theme.js",
            "export const colors = {};\nexport const typography = {};\n\
             export const spacing = {};\nexport const borderRadius = {};\n\
             export const shadows = {};\n",
        )
        .with_file(
            "App.js",
            "import { NavigationContainer } from '@react-navigation/native';\n\
             import { createStackNavigator } from '@react-navigation/stack';\n",
        );

    let outcomes = run_preset("expo-app", &files);

    assert!(outcome(&outcomes, "Theme exports").passed);
    assert!(outcome(&outcomes, "Navigation setup").passed);
}

#[test]
fn premium_features_names_each_missing_widget_service_method() {
    let files = MemoryFiles::new().with_file(
        "services/WidgetService.js",
        "import * as LocalAuthentication from 'expo-local-authentication';\n\
         const WIDGET_KEYS = { PRIMARY: 'primary' };\n\
         class WidgetService {\n\
           async setPrimaryDoor(door) {}\n\
           async getPrimaryDoor() {}\n\
           async syncWidgetData() {}\n\
           async isWidgetReady() {}\n\
           async setWidgetEnabled(on) {}\n\
           async isWidgetEnabled() {}\n\
           async authenticateForWidget() { return LocalAuthentication.authenticateAsync(); }\n\
           quickUnlock() {}\n\
         }\n\
         export default new WidgetService();\n",
    );

    let outcomes = run_preset("premium-features", &files);

    let service = outcome(&outcomes, "Widget service API");
    let messages: Vec<_> = service.failures.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].contains("quickUnlock"));
    assert!(messages[1].contains("clearWidgetData"));
}

#[test]
fn premium_features_reports_missing_components_by_path() {
    let files = MemoryFiles::new()
        .with_file("hooks/useResponsive.js", "export default useResponsive;\n")
        .with_file("contexts/ThemeContext.js", "");

    let outcomes = run_preset("premium-features", &files);

    let existence = outcome(&outcomes, "Premium components");
    assert!(!existence.passed);
    let subjects: Vec<_> = existence.failures.iter().map(|f| f.subject.as_str()).collect();
    assert!(subjects.contains(&"components/HapticButton.js"));
    assert!(subjects.contains(&"screens/WidgetSettingsScreen.js"));
    assert!(!subjects.contains(&"hooks/useResponsive.js"));
}
