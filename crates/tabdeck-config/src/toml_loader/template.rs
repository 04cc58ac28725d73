//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Tabdeck Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Main window"
# width = 1280
# height = 720
# decorations = false
# startup_mode = "windowed"   # windowed | maximized

[frontend]
# url = "http://localhost:5173"   # dev server, overrides index_html
# index_html = "dist/index.html"
# devtools = false               # defaults to true in debug builds
# open_devtools_on_start = false

[layout]
# nav_ratio = 0.1        # sidebar width as a fraction of the window width
# head_ratio = 0.95      # header offset is height - floor(height * head_ratio)
# height_mode = "full_window"   # full_window | below_header

[history]
# capacity = 100         # 2-10000; a tab keeps at most capacity - 1 URLs

[surface]
# user_agent = "Tabdeck/0.1"
# devtools = false
# partition_dir = "/path/to/partitions"

[interceptor]
# Debug capture of image responses. Writes files to disk.
# enabled = false
# protocol_version = "1.3"
# devtools_host = "127.0.0.1"
# devtools_port = 9222
# image_extensions = ["png"]
# capture_dir = "/path/to/captures"

[shortcuts]
# find_in_page = "Ctrl+F"
# open_devtools = "Ctrl+Shift+D"

[logging]
# level = "INFO"         # DEBUG | INFO | WARNING | ERROR
"##
}
