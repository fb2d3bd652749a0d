//! Naming-template rendering: `"{Series} - Chapter {Chapter:000}"` plus a
//! data source becomes a concrete file or folder name.
//!
//! Rendering never fails. Unknown placeholders stay in the output verbatim so
//! a typo is visible in the preview instead of silently vanishing.

use crate::format::OutputFormat;
use crate::padding::{self, PaddingPolicy};
use crate::sample::DataSource;

/// What the rendered string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    FileName,
    Folder,
}

/// Rendering configuration, one value per consumed setting.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub chapter_padding: PaddingPolicy,
    pub volume_padding: PaddingPolicy,
    /// Width used when `chapter_padding` is [`PaddingPolicy::Auto`]. The
    /// series-wide maximum chapter width is computed by whoever owns the full
    /// chapter list and passed in here; previews use
    /// [`DEFAULT_AUTO_PAD_WIDTH`].
    pub auto_pad_width: usize,
    pub output_format: OutputFormat,
    pub include_title: bool,
}

/// Illustrative `Auto` width for previews, when no series-wide maximum is
/// available.
pub const DEFAULT_AUTO_PAD_WIDTH: usize = 4;

/// Shown in place of an empty file-name template so the preview gives
/// guidance before the user types anything.
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{Series} - Chapter {Chapter}";

/// Shown in place of an empty folder template.
pub const DEFAULT_FOLDER_TEMPLATE: &str = "{Series}";

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chapter_padding: PaddingPolicy::Auto,
            volume_padding: PaddingPolicy::None,
            auto_pad_width: DEFAULT_AUTO_PAD_WIDTH,
            output_format: OutputFormat::Cbz,
            include_title: true,
        }
    }
}

/// Which later pipeline step cares about a substituted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanRole {
    Chapter,
    /// `{Chapter:<width>}` — already padded, ambient policy does not apply.
    ChapterExplicit,
    Volume,
    Title,
    Other,
}

/// A substitution recorded at its position in the output. Byte offsets, kept
/// current as earlier spans are resized. Repadding and title removal work on
/// these spans instead of re-searching the output for the substituted text,
/// so a value that happens to occur elsewhere in the string (or contains
/// pattern-special characters) is never matched by accident.
#[derive(Debug)]
struct Span {
    role: SpanRole,
    start: usize,
    len: usize,
}

/// Render `template` against `data`.
///
/// The steps below run in a fixed order; later steps operate on the spans the
/// substitution step recorded.
///
/// 1. An empty template falls back to the default template for `target`.
/// 2. Every `{key}` whose name matches a data-source entry
///    (case-insensitively) is replaced with the entry's value, as opaque
///    literal text. Unmatched tokens stay verbatim.
/// 3. `{Chapter:<digits>}` is replaced with the chapter value padded to the
///    mask's length (`{Chapter:000}` pads to three digits), overriding the
///    ambient chapter policy for that occurrence. A non-digit mask leaves the
///    token verbatim.
/// 4. The ambient chapter policy is applied to each bare chapter span.
/// 5. The volume policy is applied to each volume span.
/// 6. With `include_title` off, title spans are removed along with the
///    separator run just before them (whitespace, an optional hyphen, more
///    whitespace).
/// 7. File names get the output format's extension unless already present;
///    folders get a trailing `/`.
pub fn render(
    template: &str,
    data: &DataSource,
    target: TargetKind,
    options: &RenderOptions,
) -> String {
    let template = if template.is_empty() {
        match target {
            TargetKind::FileName => DEFAULT_FILE_NAME_TEMPLATE,
            TargetKind::Folder => DEFAULT_FOLDER_TEMPLATE,
        }
    } else {
        template
    };
    tracing::trace!("rendering {:?} template: {}", target, template);

    let (mut out, mut spans) = substitute(template, data);

    // Steps 4-5: repad recorded spans in place. The span text is exactly the
    // raw value substituted in step 2, so it can be re-derived from there.
    for i in 0..spans.len() {
        let policy = match spans[i].role {
            SpanRole::Chapter => options.chapter_padding,
            SpanRole::Volume => options.volume_padding,
            _ => continue,
        };
        let raw = &out[spans[i].start..spans[i].start + spans[i].len];
        let padded = padding::pad(raw, policy, options.auto_pad_width);
        splice(&mut out, &mut spans, i, &padded);
    }

    if !options.include_title {
        strip_titles(&mut out, &spans);
    }

    match target {
        TargetKind::FileName => {
            let ext = options.output_format.extension();
            if !out.ends_with(ext) {
                out.push_str(ext);
            }
        }
        TargetKind::Folder => {
            if !out.ends_with('/') {
                out.push('/');
            }
        }
    }
    out
}

/// Single left-to-right scan. Replacement values are copied into the output
/// as-is and never re-scanned, so a value containing `{Series}` or
/// pattern-special characters is inert text.
fn substitute(template: &str, data: &DataSource) -> (String, Vec<Span>) {
    let mut out = String::with_capacity(template.len());
    let mut spans = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, from_open) = rest.split_at(open);
        out.push_str(literal);
        let Some(close) = from_open.find('}') else {
            out.push_str(from_open);
            return (out, spans);
        };
        let inner = &from_open[1..close];

        match resolve_token(inner, data) {
            Some((value, role)) => {
                spans.push(Span {
                    role,
                    start: out.len(),
                    len: value.len(),
                });
                out.push_str(&value);
                rest = &from_open[close + 1..];
            }
            None => {
                // Unrecognized token: keep the brace as literal text and
                // rescan right after it, so `{ {Series}` still substitutes.
                out.push('{');
                rest = &from_open[1..];
            }
        }
    }
    out.push_str(rest);
    (out, spans)
}

/// Resolve one token body (the text between the braces). `None` means the
/// token is not recognized and stays verbatim.
fn resolve_token(inner: &str, data: &DataSource) -> Option<(String, SpanRole)> {
    if let Some((head, mask)) = inner.split_once(':') {
        if !head.eq_ignore_ascii_case("Chapter") {
            return None;
        }
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = data.get("Chapter")?;
        return Some((
            padding::pad_to_width(value, mask.len()),
            SpanRole::ChapterExplicit,
        ));
    }

    let value = data.get(inner)?;
    let role = if inner.eq_ignore_ascii_case("Chapter") {
        SpanRole::Chapter
    } else if inner.eq_ignore_ascii_case("Volume") {
        SpanRole::Volume
    } else if inner.eq_ignore_ascii_case("Title") {
        SpanRole::Title
    } else {
        SpanRole::Other
    };
    Some((value.to_string(), role))
}

/// Replace the text of `spans[idx]` with `new_text`, shifting every later
/// span by the size difference.
fn splice(out: &mut String, spans: &mut [Span], idx: usize, new_text: &str) {
    let start = spans[idx].start;
    let old_len = spans[idx].len;
    out.replace_range(start..start + old_len, new_text);
    spans[idx].len = new_text.len();
    for later in &mut spans[idx + 1..] {
        later.start = later.start + new_text.len() - old_len;
    }
}

/// Remove every title span plus the separator run directly before it:
/// whitespace, then at most one hyphen, then more whitespace. Spans are
/// processed right to left so earlier offsets stay valid.
fn strip_titles(out: &mut String, spans: &[Span]) {
    for span in spans.iter().rev() {
        if span.role != SpanRole::Title {
            continue;
        }
        let mut from = span.start;
        from = trim_back(out, from, |c| c.is_whitespace());
        if out[..from].ends_with('-') {
            from -= 1;
        }
        from = trim_back(out, from, |c| c.is_whitespace());
        out.replace_range(from..span.start + span.len, "");
    }
}

fn trim_back(s: &str, mut pos: usize, matches: impl Fn(char) -> bool) -> usize {
    while let Some(c) = s[..pos].chars().next_back() {
        if !matches(c) {
            break;
        }
        pos -= c.len_utf8();
    }
    pos
}
