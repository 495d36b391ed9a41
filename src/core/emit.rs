//! Final artifact rendering: banner, guard, hoisted block, body.
//!
//! Pure concatenation; no content transformation happens past this point.

/// Banner fields stamped at the top of the generated header.
#[derive(Debug, Clone)]
pub struct Banner {
    pub title: String,
    pub author: String,
    /// Build date, `DD/MM/YYYY`. Injected so tests can pin it.
    pub date: String,
}

/// Today's date in the banner's `DD/MM/YYYY` format.
pub fn today_stamp() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Render the complete amalgamated header.
///
/// Layout: banner comment block, blank line, `#ifndef`/`#define` pair,
/// blank line, comment plus one `#include <...>` line per hoisted system
/// dependency (already sorted), the assembled body, the closing guard, and
/// a trailing newline.
pub fn render(banner: &Banner, guard: &str, hoisted: &[String], body: &[String]) -> String {
    let mut out: Vec<String> = vec![
        "//".to_string(),
        format!("// {}", banner.title),
        "//".to_string(),
        format!("// {}", banner.author),
        format!("// Compiled (squeezed) - {}", banner.date),
        "//".to_string(),
        String::new(),
        format!("#ifndef {guard}"),
        format!("#define {guard}"),
        String::new(),
    ];

    out.push("// All used standard libs".to_string());
    for lib in hoisted {
        out.push(format!("#include <{lib}>"));
    }

    out.extend(body.iter().cloned());

    out.push(format!("#endif // {guard}"));
    out.push(String::new());

    out.join("\n")
}
