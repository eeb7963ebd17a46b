//! Script template constants.

/// First lines of every generated script.
pub const PREAMBLE: &str = "; Inno Setup script generated by inno_bundle.\n\
; Changes are overwritten on the next build; edit pubspec.yaml instead.\n\n";

/// `[Setup]` section. Values that contain braces or backslashes are
/// pre-formatted by the caller so the template stays free of escapes.
pub const SETUP_TEMPLATE: &str = "[Setup]
AppId={{app_id}}
AppName={{app_name}}
UninstallDisplayName={{app_name}}
UninstallDisplayIcon={{uninstall_icon}}
AppVersion={{version}}
AppComments={{description}}
AppPublisher={{publisher}}
AppPublisherURL={{url}}
AppSupportURL={{support_url}}
AppUpdatesURL={{updates_url}}
DefaultDirName={{default_dir}}
PrivilegesRequired={{privileges}}
OutputDir={{output_dir}}
OutputBaseFilename={{installer_name}}
SetupIconFile={{installer_icon}}
{{#if license_file}}LicenseFile={{license_file}}
{{/if}}Compression=lzma2
SolidCompression=yes
WizardStyle=modern
ArchitecturesAllowed=x64compatible
ArchitecturesInstallIn64BitMode=x64compatible
DisableWelcomePage={{disable_welcome_page}}
DisableDirPage={{disable_dir_page}}
DisableProgramGroupPage={{disable_program_group_page}}
DisableReadyMemo={{disable_ready_memo}}
DisableReadyPage={{disable_ready_page}}
DisableFinishedPage={{disable_finished_page}}
";
