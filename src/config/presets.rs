use crate::error::{Result, ShapeGuardError};

use super::Config;

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["expo-app", "responsive-ui", "premium-features"];

/// Load a built-in preset by name.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn load_preset(name: &str) -> Result<Config> {
    let content = preset_source(name)?;
    toml::from_str(content)
        .map_err(|e| ShapeGuardError::Config(format!("Failed to parse preset '{name}': {e}")))
}

/// The raw TOML of a built-in preset, as `init --preset` writes it.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn preset_source(name: &str) -> Result<&'static str> {
    match name {
        "expo-app" => Ok(PRESET_EXPO_APP),
        "responsive-ui" => Ok(PRESET_RESPONSIVE_UI),
        "premium-features" => Ok(PRESET_PREMIUM_FEATURES),
        _ => Err(ShapeGuardError::Config(format!(
            "Unknown preset: '{}'. Available presets: {}",
            name,
            AVAILABLE_PRESETS.join(", ")
        ))),
    }
}

const PRESET_EXPO_APP: &str = r#"
version = "1"

[scanner]
exclude = ["node_modules/**", ".expo/**", ".git/**"]

[[rules]]
name = "Essential files"
kind = "existence"
paths = ["package.json", "App.js", "app.json", "babel.config.js"]

[[rules]]
name = "package.json structure"
kind = "field-presence"
path = "package.json"
fields = ["name", "version", "dependencies", "scripts", "dependencies.expo"]

[[rules]]
name = "app.json configuration"
kind = "field-presence"
path = "app.json"
fields = ["expo.name", "expo.slug", "expo.version"]

[[rules]]
name = "JavaScript syntax"
kind = "external-syntax"
paths = ["*.js", "screens/*.js", "components/*.js", "services/*.js", "constants/*.js"]
allow_empty = true

[[rules]]
name = "App.js imports resolve"
kind = "cross-reference"
source = "App.js"

[rules.references]
"./screens/ServerConfigScreen" = "screens/ServerConfigScreen.js"
"./screens/LoginScreen" = "screens/LoginScreen.js"
"./screens/DoorListScreen" = "screens/DoorListScreen.js"
"./screens/DoorControlScreen" = "screens/DoorControlScreen.js"
"./constants/theme" = "constants/theme.js"

[[rules]]
name = "Screen imports resolve"
kind = "cross-reference"
source = "screens/*.js"

[rules.references]
"../constants/theme" = "constants/theme.js"
"../services/api" = "services/api.js"

[[rules]]
name = "Component imports resolve"
kind = "cross-reference"
source = "components/*.js"

[rules.references]
"../constants/theme" = "constants/theme.js"
"../services/api" = "services/api.js"

[[rules]]
name = "Theme exports"
kind = "pattern-presence"
paths = ["constants/theme.js"]
patterns = [
    "export const colors",
    "export const typography",
    "export const spacing",
    "export const borderRadius",
    "export const shadows",
]

[[rules]]
name = "Lucide icons are imported"
kind = "pattern-presence"
paths = ["components/*.js", "screens/*.js"]
pattern = '''import\s*\{[^}]*\}\s*from\s*['"]lucide-react-native['"]'''
regex = true
only_if = "lucide-react-native"
allow_empty = true

[[rules]]
name = "Navigation setup"
kind = "pattern-presence"
paths = ["App.js"]
patterns = [
    "@react-navigation/native",
    "@react-navigation/stack",
    "NavigationContainer",
    "createStackNavigator",
]
"#;

const PRESET_RESPONSIVE_UI: &str = r#"
version = "1"

[scanner]
exclude = ["node_modules/**", ".expo/**", ".git/**"]

[[rules]]
name = "Responsive hook exists"
kind = "pattern-presence"
paths = ["hooks/useResponsive.js"]
pattern = 'export default function useResponsive|export default useResponsive'
regex = true

[[rules]]
name = "Screens import useResponsive"
kind = "pattern-presence"
paths = ["screens/*.js", "components/*.js"]
pattern = "from '../hooks/useResponsive'"

[[rules]]
name = "Screens call useResponsive"
kind = "pattern-presence"
paths = ["screens/*.js", "components/*.js"]
pattern = "useResponsive()"

[[rules]]
name = "Screens scale fonts and spacing"
kind = "pattern-presence"
paths = ["screens/*.js"]
pattern = '\b(scaleFont|spacing)\b'
regex = true

[[rules]]
name = "Activity log has no haptics"
kind = "pattern-absence"
paths = ["screens/ActivityLogScreen.js"]
pattern = 'import \* as Haptics from|Haptics\.'
regex = true

[[rules]]
name = "Tab bar respects safe area"
kind = "pattern-presence"
paths = ["App.js"]
pattern = "insets.bottom"

[[rules]]
name = "Safe area insets imported"
kind = "pattern-presence"
paths = ["App.js"]
pattern = '''useSafeAreaInsets[\s\S]*from\s*['"]react-native-safe-area-context['"]'''
regex = true
"#;

const PRESET_PREMIUM_FEATURES: &str = r#"
version = "1"

[scanner]
exclude = ["node_modules/**", ".expo/**", ".git/**"]

[[rules]]
name = "Premium components"
kind = "existence"
paths = [
    "hooks/useResponsive.js",
    "contexts/ThemeContext.js",
    "components/SkeletonLoader.js",
    "components/AnimatedThemeSwitch.js",
    "components/HapticButton.js",
    "components/PremiumRefreshControl.js",
    "components/GlassBackground.js",
    "services/WidgetService.js",
    "screens/WidgetSettingsScreen.js",
]

[[rules]]
name = "Responsive hook API"
kind = "pattern-presence"
paths = ["hooks/useResponsive.js"]
patterns = [
    "scaleWidth",
    "scaleHeight",
    "scaleFont",
    "spacing",
    "radius",
    "iconSize",
    "buttonHeight",
    "cardPadding",
    "headerHeight",
    "tabBarHeight",
    "hitSlop",
    "gridColumns",
    "contentMaxWidth",
    "BREAKPOINTS",
]

[[rules]]
name = "Device classes"
kind = "pattern-presence"
paths = ["hooks/useResponsive.js"]
patterns = [
    "verySmallPhone",
    "isSmallPhone",
    "isPhone",
    "isLargePhone",
    "isTablet",
    "isLowEndDevice",
    'const\s+tabBarPadding\s*=\s*\(\)\s*=>',
    'return\s*\{[\s\S]*isLowEndDevice',
]
regex = true

[[rules]]
name = "Theme transitions"
kind = "pattern-presence"
paths = ["contexts/ThemeContext.js"]
patterns = [
    "transitionProgress",
    "overlayOpacity",
    "animatedColors",
    "animateThemeChange",
    "Animated.timing",
    "Haptics",
]

[[rules]]
name = "Skeleton shimmer"
kind = "pattern-presence"
paths = ["components/SkeletonLoader.js"]
patterns = ["shimmerAnim", "LinearGradient", "translateX", "Animated.loop"]

[[rules]]
name = "Skeleton presets"
kind = "pattern-presence"
paths = ["components/SkeletonLoader.js"]
patterns = [
    'export (function|const) DoorCardSkeleton\b',
    'export (function|const) SkeletonList\b',
    'export (function|const) ActivitySkeleton\b',
]
regex = true

[[rules]]
name = "Theme switch animations"
kind = "pattern-presence"
paths = ["components/AnimatedThemeSwitch.js"]
patterns = ["rotateAnim", "scaleAnim", "glowAnim", "Animated.spring", "Sun", "Moon"]

[[rules]]
name = "Haptic button"
kind = "pattern-presence"
paths = ["components/HapticButton.js"]
patterns = ["Haptics", "triggerHaptic", "ImpactFeedbackStyle", "useResponsive"]

[[rules]]
name = "Refresh control animations"
kind = "pattern-presence"
paths = ["components/PremiumRefreshControl.js"]
patterns = ["spinAnim", "scaleAnim", "opacityAnim", "Animated.loop"]

[[rules]]
name = "Glass background"
kind = "pattern-presence"
paths = ["components/GlassBackground.js"]
patterns = ["BlurView", "(?i)fallback"]
regex = true

[[rules]]
name = "Door card keeps long-press haptics"
kind = "pattern-presence"
paths = ["components/DoorCard.js"]
pattern = 'handleLongPress[\s\S]*Haptics\.impactAsync'
regex = true

[[rules]]
name = "Widget service API"
kind = "pattern-presence"
paths = ["services/WidgetService.js"]
patterns = [
    'async\s+setPrimaryDoor\s*\(',
    'async\s+getPrimaryDoor\s*\(',
    'async\s+syncWidgetData\s*\(',
    'async\s+isWidgetReady\s*\(',
    'async\s+setWidgetEnabled\s*\(',
    'async\s+isWidgetEnabled\s*\(',
    'async\s+authenticateForWidget\s*\(',
    'async\s+quickUnlock\s*\(',
    'async\s+clearWidgetData\s*\(',
    'const\s+WIDGET_KEYS\s*=\s*\{',
    'LocalAuthentication\.authenticateAsync',
    'export\s+default\s+new\s+WidgetService\(\)',
]
regex = true

[[rules]]
name = "Widget settings screen"
kind = "pattern-presence"
paths = ["screens/WidgetSettingsScreen.js"]
patterns = [
    'WidgetService',
    'Switch',
    'SafeAreaView',
    '\[doors,\s*set\w+\]\s*=\s*useState',
    '\[primaryDoor,\s*set\w+\]\s*=\s*useState',
    '\[widgetEnabled,\s*set\w+\]\s*=\s*useState',
    '\[loading,\s*set\w+\]\s*=\s*useState',
    'handleToggleWidget\s*=\s*async',
    'handleSelectDoor\s*=\s*async',
    'handleTestUnlock\s*=\s*async',
    'TestUnlock',
]
regex = true

[[rules]]
name = "Account screen links widget settings"
kind = "pattern-presence"
paths = ["screens/AccountScreen.js"]
patterns = [
    '''navigate\(\s*['"]WidgetSettings['"]''',
    '(?s)<Smartphone.*Quick Unlock Widget',
    '''from\s+['"]lucide-react-native['"]''',
]
regex = true

[[rules]]
name = "Widget settings route"
kind = "pattern-presence"
paths = ["App.js"]
patterns = [
    "WidgetSettingsScreen",
    '<Stack\.Screen.*name=.*WidgetSettings.*component.*WidgetSettingsScreen',
]
regex = true

[[rules]]
name = "Widget code syntax"
kind = "external-syntax"
paths = ["services/WidgetService.js", "screens/WidgetSettingsScreen.js"]
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
