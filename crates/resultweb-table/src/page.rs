//! Page shell

use resultweb_utils::{escape_text, Markup};

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, stylesheet: &str, content: &Markup) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <link rel="stylesheet" type="text/css" href="{}" />
    <style>
        .not-important {{ opacity: 0.5; }}
        .grade-pass {{ color: #15803d; }}
        .grade-fail {{ color: #b91c1c; }}
    </style>
    <title>{}</title>
</head>
<body>
<h1>{}</h1>
{}
</body>
</html>
"#,
        escape_text(stylesheet),
        escape_text(title),
        escape_text(title),
        content
    )
}
