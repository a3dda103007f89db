//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Timeclock Kiosk Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[target]
# url = "https://webtime2.paylocity.com/WebTime/Login/WebClock"
# open_external_links = true   # false: new-window requests are only canceled
# user_agent = "Mozilla/5.0 ..."

[window]
# title = "Timeclock"
# fullscreen = true
# width = 1280               # 320-7680, windowed mode only
# height = 800               # 240-4320, windowed mode only
# allow_escape = false
# devtools = false

[overlay]
# width = 132                # 16-1024
# height = 44                # 16-1024
# margin = 16                # 0-200
# default_anchor = "top-right"  # top-right, center
# interaction = "non-focusable" # non-focusable, focusable
# always_on_top = true

[health]
# enabled = true
# min_text_len = 5           # 0-10000
# min_markup_len = 80        # 0-100000
# check_delays_ms = [250, 1500]  # 1-4 entries, each <= 60000

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARN, ERROR
"##
    .to_string()
}
