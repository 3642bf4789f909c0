//! Turning the preview URL into something pasteable.

mod toast;
pub use toast::{Toast, ToastCenter, ToastKind};

use std::future::Future;

/// Text flavour written to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareFormat {
    /// The bare URL.
    Plain,
    /// `![label](url)`
    Markdown,
    /// `<img src="url" alt="label" />`
    Code,
}

impl ShareFormat {
    pub const ALL: [ShareFormat; 3] = [Self::Plain, Self::Markdown, Self::Code];

    pub fn render(self, url: &str, label: &str) -> String {
        match self {
            Self::Plain => url.to_string(),
            Self::Markdown => format!("![{label}]({url})"),
            Self::Code => format!(r#"<img src="{url}" alt="{label}" />"#),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    #[error("no preview has been generated yet")]
    MissingPreview,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Something that can put text on the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&self, text: String) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Format the current preview URL and write it to `writer`.
///
/// Returns the text that was written. Nothing is written when there is no preview.
pub async fn copy_preview<W: ClipboardWriter>(
    writer: &W,
    preview_url: Option<&str>,
    label: &str,
    format: ShareFormat,
) -> Result<String, CopyError> {
    let url = preview_url
        .filter(|url| !url.is_empty())
        .ok_or(CopyError::MissingPreview)?;
    let text = format.render(url, label);
    writer.write_text(text.clone()).await?;
    Ok(text)
}

/// The platform clipboard: a hidden textarea + `copy` command in the browser, `arboard` natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        #[cfg(target_arch = "wasm32")]
        {
            write_via_textarea(&text)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use arboard::Clipboard;

            let mut clipboard =
                Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Rejected(err.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_via_textarea(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    let unavailable = |what: &str| ClipboardError::Unavailable(what.to_string());

    let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
    let document = window.document().ok_or_else(|| unavailable("document"))?;
    let body = document.body().ok_or_else(|| unavailable("body"))?;

    let textarea = document
        .create_element("textarea")
        .map_err(|_| unavailable("textarea"))?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| unavailable("textarea cast"))?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "0").ok();
    style.set_property("left", "0").ok();
    style.set_property("opacity", "0").ok();

    body.append_child(&textarea).ok();
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    textarea.remove();

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::Rejected("copy command was blocked".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
        reject: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            if self.reject {
                return Err(ClipboardError::Rejected("permission denied".into()));
            }
            self.writes.borrow_mut().push(text);
            Ok(())
        }
    }

    #[test]
    fn formats_follow_category_label() {
        let url = "https://x/y.png";
        assert_eq!(ShareFormat::Plain.render(url, "Pin (GitHub)"), url);
        assert_eq!(
            ShareFormat::Markdown.render(url, "Pin (GitHub)"),
            "![Pin (GitHub)](https://x/y.png)"
        );
        assert_eq!(
            ShareFormat::Code.render(url, "Pin (GitHub)"),
            r#"<img src="https://x/y.png" alt="Pin (GitHub)" />"#
        );
    }

    #[test]
    fn markdown_copy_writes_image_tag() {
        let clipboard = RecordingClipboard::default();
        let written = block_on(copy_preview(
            &clipboard,
            Some("https://x/y.png"),
            "Pin (GitHub)",
            ShareFormat::Markdown,
        ));
        assert_eq!(written.as_deref(), Ok("![Pin (GitHub)](https://x/y.png)"));
        assert_eq!(
            clipboard.writes.borrow().as_slice(),
            ["![Pin (GitHub)](https://x/y.png)".to_string()]
        );
    }

    #[test]
    fn missing_preview_writes_nothing() {
        let clipboard = RecordingClipboard::default();
        for preview in [None, Some("")] {
            let outcome = block_on(copy_preview(
                &clipboard,
                preview,
                "Pin (GitHub)",
                ShareFormat::Plain,
            ));
            assert_eq!(outcome, Err(CopyError::MissingPreview));
        }
        assert!(clipboard.writes.borrow().is_empty());
    }

    #[test]
    fn rejected_write_surfaces_clipboard_error() {
        let clipboard = RecordingClipboard {
            reject: true,
            ..Default::default()
        };
        let outcome = block_on(copy_preview(
            &clipboard,
            Some("https://x/y.png"),
            "Activity (GitHub)",
            ShareFormat::Code,
        ));
        assert!(matches!(outcome, Err(CopyError::Clipboard(ClipboardError::Rejected(_)))));
    }
}
