//! Plain-text outline rendering
//!
//! One line per entry:
//!
//! ```text
//! Class Server  :3
//!   Constructor constructor  :4
//!   Method start  :9
//! Function main  :20
//! ```

use std::fmt::Write;

use super::{Outline, OutlineEntry};
use crate::config::RenderSettings;

/// Renders an [`Outline`] as indented text
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    settings: RenderSettings,
}

impl TextRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Render every entry, depth first, in outline order
    pub fn render(&self, outline: &Outline) -> String {
        let mut output = String::new();
        let mut pending: Vec<(usize, &OutlineEntry)> =
            outline.entries().iter().rev().map(|entry| (0, entry)).collect();

        while let Some((depth, entry)) = pending.pop() {
            self.render_line(&mut output, depth, entry);
            pending.extend(entry.children.iter().rev().map(|child| (depth + 1, child)));
        }

        output
    }

    fn render_line(&self, output: &mut String, depth: usize, entry: &OutlineEntry) {
        let indent = depth * self.settings.indent;
        let _ = write!(output, "{:indent$}{} {}", "", entry.label, entry.name);

        if self.settings.show_detail {
            if let Some(detail) = &entry.detail {
                let _ = write!(output, "  ({})", detail);
            }
        }
        if self.settings.show_lines {
            let _ = write!(output, "  :{}", u64::from(entry.line) + 1);
        }
        output.push('\n');
    }
}
