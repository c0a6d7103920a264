//! Shell settings table
//!
//! Key names are the persisted contract and keep the shell's historical
//! camelCase spelling. `dankBarPosition` carries no aliases here: its legacy
//! `*AtBottom` booleans are folded by the migration pass instead.

use crate::coerce::percent_to_unit;
use crate::hooks::Hook;
use crate::schema::{RegistryBuilder, SchemaRegistry};
use serde_json::json;

pub(crate) fn build() -> SchemaRegistry {
    let mut b = RegistryBuilder::new();

    // Theme
    b.setting("currentThemeName", json!("blue")).on_change(Hook::ApplyStoredTheme);
    b.setting("customThemeFile", json!(""));
    b.setting("matugenScheme", json!("scheme-tonal-spot")).on_change(Hook::RegenSystemThemes);
    b.setting("runUserMatugenTemplates", json!(true)).on_change(Hook::RegenSystemThemes);
    b.setting("matugenTargetMonitor", json!("")).on_change(Hook::RegenSystemThemes);

    // Transparency
    b.setting("dankBarTransparency", json!(1.0))
        .coerce(percent_to_unit)
        .aliases(&["topBarTransparency"]);
    b.setting("dankBarWidgetTransparency", json!(1.0))
        .coerce(percent_to_unit)
        .aliases(&["topBarWidgetTransparency"]);
    b.setting("popupTransparency", json!(1.0)).coerce(percent_to_unit);
    b.setting("dockTransparency", json!(1.0)).coerce(percent_to_unit);

    // Appearance
    b.setting("widgetBackgroundColor", json!("sch"));
    b.setting("cornerRadius", json!(12)).on_change(Hook::UpdateNiriLayout);

    // General
    b.setting("use24HourClock", json!(true));
    b.setting("showSeconds", json!(false));
    b.setting("useFahrenheit", json!(false));
    b.setting("nightModeEnabled", json!(false));
    b.setting("animationSpeed", json!(1));
    b.setting("customAnimationDuration", json!(500));
    b.setting("wallpaperFillMode", json!("Fill"));
    b.setting("blurredWallpaperLayer", json!(false));
    b.setting("blurWallpaperOnOverview", json!(false));

    // Bar widgets
    b.setting("showLauncherButton", json!(true));
    b.setting("showWorkspaceSwitcher", json!(true));
    b.setting("showFocusedWindow", json!(true));
    b.setting("showWeather", json!(true));
    b.setting("showMusic", json!(true));
    b.setting("showClipboard", json!(true));
    b.setting("showCpuUsage", json!(true));
    b.setting("showMemUsage", json!(true));
    b.setting("showCpuTemp", json!(true));
    b.setting("showGpuTemp", json!(true));
    b.setting("selectedGpuIndex", json!(0));
    b.setting("enabledGpuPciIds", json!([]));
    b.setting("showSystemTray", json!(true));
    b.setting("showClock", json!(true));
    b.setting("showNotificationButton", json!(true));
    b.setting("showBattery", json!(true));
    b.setting("showControlCenterButton", json!(true));

    // Control center
    b.setting("controlCenterShowNetworkIcon", json!(true));
    b.setting("controlCenterShowBluetoothIcon", json!(true));
    b.setting("controlCenterShowAudioIcon", json!(true));
    b.setting(
        "controlCenterWidgets",
        json!([
            { "id": "volumeSlider", "enabled": true, "width": 50 },
            { "id": "brightnessSlider", "enabled": true, "width": 50 },
            { "id": "wifi", "enabled": true, "width": 50 },
            { "id": "bluetooth", "enabled": true, "width": 50 },
            { "id": "audioOutput", "enabled": true, "width": 50 },
            { "id": "audioInput", "enabled": true, "width": 50 },
            { "id": "nightMode", "enabled": true, "width": 50 },
            { "id": "darkMode", "enabled": true, "width": 50 }
        ]),
    );

    // Workspaces and bar widget options
    b.setting("showWorkspaceIndex", json!(false));
    b.setting("showWorkspacePadding", json!(false));
    b.setting("workspaceScrolling", json!(false));
    b.setting("showWorkspaceApps", json!(false));
    b.setting("maxWorkspaceIcons", json!(3));
    b.setting("workspacesPerMonitor", json!(true));
    b.setting("dwlShowAllTags", json!(false));
    b.setting("workspaceNameIcons", json!({}));
    b.setting("waveProgressEnabled", json!(true));
    b.setting("clockCompactMode", json!(false));
    b.setting("focusedWindowCompactMode", json!(false));
    b.setting("runningAppsCompactMode", json!(true));
    b.setting("keyboardLayoutNameCompactMode", json!(false));
    b.setting("runningAppsCurrentWorkspace", json!(false));
    b.setting("runningAppsGroupByApp", json!(false));
    b.setting("clockDateFormat", json!(""));
    b.setting("lockDateFormat", json!(""));
    b.setting("mediaSize", json!(1));

    // Bar layout
    b.setting(
        "dankBarLeftWidgets",
        json!(["launcherButton", "workspaceSwitcher", "focusedWindow"]),
    )
    .aliases(&["topBarLeftWidgets"]);
    b.setting("dankBarCenterWidgets", json!(["music", "clock", "weather"]))
        .aliases(&["topBarCenterWidgets"]);
    b.setting(
        "dankBarRightWidgets",
        json!([
            "systemTray",
            "clipboard",
            "cpuUsage",
            "memUsage",
            "notificationButton",
            "battery",
            "controlCenterButton"
        ]),
    )
    .aliases(&["topBarRightWidgets"]);
    b.setting("dankBarWidgetOrder", json!([]));

    // Launcher views
    b.setting("appLauncherViewMode", json!("list"));
    b.setting("spotlightModalViewMode", json!("list"));
    b.setting("sortAppsAlphabetically", json!(false));

    // Weather
    b.setting("weatherLocation", json!("New York, NY"));
    b.setting("weatherCoordinates", json!("40.7128,-74.0060"));
    b.setting("useAutoLocation", json!(false));
    b.setting("weatherEnabled", json!(true));

    // Network
    b.setting("networkPreference", json!("auto"));
    b.setting("vpnLastConnected", json!(""));

    // Icon theme
    b.setting("iconTheme", json!("System Default")).on_change(Hook::ApplyStoredIconTheme);
    b.setting("availableIconThemes", json!(["System Default"])).runtime_only();
    b.setting("systemDefaultIconTheme", json!("")).runtime_only();
    b.setting("qt5ctAvailable", json!(false)).runtime_only();
    b.setting("qt6ctAvailable", json!(false)).runtime_only();
    b.setting("gtkAvailable", json!(false)).runtime_only();

    // Launcher logo
    b.setting("launcherLogoMode", json!("apps"));
    b.setting("launcherLogoCustomPath", json!(""));
    b.setting("launcherLogoColorOverride", json!(""));
    b.setting("launcherLogoColorInvertOnMode", json!(false));
    b.setting("launcherLogoBrightness", json!(0.5));
    b.setting("launcherLogoContrast", json!(1));
    b.setting("launcherLogoSizeOffset", json!(0));

    // Fonts
    b.setting("fontFamily", json!("Inter Variable"));
    b.setting("monoFontFamily", json!("Fira Code"));
    b.setting("fontWeight", json!(400));
    b.setting("fontScale", json!(1.0));
    b.setting("dankBarFontScale", json!(1.0));

    // Notepad
    b.setting("notepadUseMonospace", json!(true));
    b.setting("notepadFontFamily", json!(""));
    b.setting("notepadFontSize", json!(14));
    b.setting("notepadShowLineNumbers", json!(false));
    b.setting("notepadTransparencyOverride", json!(-1));
    b.setting("notepadLastCustomTransparency", json!(0.7));

    // Sounds
    b.setting("soundsEnabled", json!(true));
    b.setting("useSystemSoundTheme", json!(false));
    b.setting("soundNewNotification", json!(true));
    b.setting("soundVolumeChanged", json!(true));
    b.setting("soundPluggedIn", json!(true));

    // Power and idle
    b.setting("acMonitorTimeout", json!(0));
    b.setting("acLockTimeout", json!(0));
    b.setting("acSuspendTimeout", json!(0));
    b.setting("acSuspendBehavior", json!(0));
    b.setting("batteryMonitorTimeout", json!(0));
    b.setting("batteryLockTimeout", json!(0));
    b.setting("batterySuspendTimeout", json!(0));
    b.setting("batterySuspendBehavior", json!(0));
    b.setting("lockBeforeSuspend", json!(false));
    b.setting("preventIdleForMedia", json!(false));
    b.setting("loginctlLockIntegration", json!(true));
    b.setting("launchPrefix", json!(""));
    b.setting("brightnessDevicePins", json!({}));

    // System theming
    b.setting("gtkThemingEnabled", json!(false)).on_change(Hook::RegenSystemThemes);
    b.setting("qtThemingEnabled", json!(false)).on_change(Hook::RegenSystemThemes);
    b.setting("syncModeWithPortal", json!(true));

    // Dock
    b.setting("showDock", json!(false));
    b.setting("dockAutoHide", json!(false));
    b.setting("dockGroupByApp", json!(false));
    b.setting("dockOpenOnOverview", json!(false));
    b.setting("dockPosition", json!(1));
    b.setting("dockSpacing", json!(4));
    b.setting("dockBottomGap", json!(0));
    b.setting("dockMargin", json!(0));
    b.setting("dockIconSize", json!(40));
    b.setting("dockIndicatorStyle", json!("circle"));

    // Bar behaviour
    b.setting("notificationOverlayEnabled", json!(false));
    b.setting("dankBarAutoHide", json!(false)).aliases(&["topBarAutoHide"]);
    b.setting("dankBarOpenOnOverview", json!(false)).aliases(&["topBarOpenOnOverview"]);
    b.setting("dankBarVisible", json!(true)).aliases(&["topBarVisible"]);
    b.setting("overviewRows", json!(2)).runtime_only();
    b.setting("overviewColumns", json!(5)).runtime_only();
    b.setting("overviewScale", json!(0.16)).runtime_only();
    b.setting("dankBarSpacing", json!(4))
        .on_change(Hook::UpdateNiriLayout)
        .aliases(&["topBarSpacing"]);
    b.setting("dankBarBottomGap", json!(0)).aliases(&["topBarBottomGap"]);
    b.setting("dankBarInnerPadding", json!(4)).aliases(&["topBarInnerPadding"]);
    b.setting("dankBarPosition", json!(0));
    b.setting("dankBarIsVertical", json!(false)).runtime_only();

    // Bar styling
    b.setting("dankBarSquareCorners", json!(false)).aliases(&["topBarSquareCorners"]);
    b.setting("dankBarNoBackground", json!(false)).aliases(&["topBarNoBackground"]);
    b.setting("dankBarGothCornersEnabled", json!(false))
        .aliases(&["topBarGothCornersEnabled"]);
    b.setting("dankBarGothCornerRadiusOverride", json!(false));
    b.setting("dankBarGothCornerRadiusValue", json!(12));
    b.setting("dankBarBorderEnabled", json!(false));
    b.setting("dankBarBorderColor", json!("surfaceText"));
    b.setting("dankBarBorderOpacity", json!(1.0));
    b.setting("dankBarBorderThickness", json!(1));

    // Popups
    b.setting("popupGapsAuto", json!(true));
    b.setting("popupGapsManual", json!(4));

    // Modals
    b.setting("modalDarkenBackground", json!(true));

    // Lock screen
    b.setting("lockScreenShowPowerActions", json!(true));
    b.setting("enableFprint", json!(false));
    b.setting("maxFprintTries", json!(3));
    b.setting("fprintdAvailable", json!(false)).runtime_only();
    b.setting("hideBrightnessSlider", json!(false));

    // Notifications
    b.setting("notificationTimeoutLow", json!(5000));
    b.setting("notificationTimeoutNormal", json!(5000));
    b.setting("notificationTimeoutCritical", json!(0));
    b.setting("notificationPopupPosition", json!(0));

    // OSD
    b.setting("osdAlwaysShowValue", json!(false));

    // Power actions
    b.setting("powerActionConfirm", json!(true));
    b.setting("customPowerActionLock", json!(""));
    b.setting("customPowerActionLogout", json!(""));
    b.setting("customPowerActionSuspend", json!(""));
    b.setting("customPowerActionHibernate", json!(""));
    b.setting("customPowerActionReboot", json!(""));
    b.setting("customPowerActionPowerOff", json!(""));

    // Updater
    b.setting("updaterUseCustomCommand", json!(false));
    b.setting("updaterCustomCommand", json!(""));
    b.setting("updaterTerminalAdditionalParams", json!(""));

    // Per-screen
    b.setting("screenPreferences", json!({}));
    b.setting("showOnLastDisplay", json!({}));

    b.build()
}
