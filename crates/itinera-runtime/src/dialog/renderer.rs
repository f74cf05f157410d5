//! Dialog renderers.
//!
//! A renderer is a function of [`DialogProps`] and [`DialogControls`]. It
//! must not keep its own open/closed flag; whether the dialog is shown is
//! decided by `props.visible` alone.

use super::{DialogControls, DialogProps};
use itinera_types::DialogKind;

/// Presentation-only dialog component.
pub trait DialogRenderer: Send {
    /// Draws (or removes) the dialog for `props`.
    ///
    /// `controls` are bound to the displayed request. Renderers that own
    /// their input (GUI buttons, key handlers) keep a clone and call it when
    /// the user acts; renderers fed by an external input loop may ignore it.
    fn render(&mut self, props: &DialogProps, controls: &DialogControls);
}

/// Terminal renderer writing to stderr.
///
/// Each visible dialog is drawn as a short block; hiding the dialog prints
/// nothing unless verbose mode is on.
pub struct ConsoleDialogRenderer {
    verbose: bool,
    color: bool,
}

impl ConsoleDialogRenderer {
    /// Creates a renderer with color enabled and verbose output disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }

    /// Sets verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables or disables ANSI color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns `true` if verbose mode is enabled.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Lines that [`render`](DialogRenderer::render) writes for `props`.
    #[must_use]
    pub fn format_lines(&self, props: &DialogProps) -> Vec<String> {
        if !props.visible {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(5);
        lines.push(String::new());

        let badge = self.badge(props.kind);
        match &props.title {
            Some(title) => {
                lines.push(format!("  {badge} {title}"));
                lines.push(format!("    {}", props.message));
            }
            None => lines.push(format!("  {badge} {}", props.message)),
        }

        lines.push(format!(
            "  [y] {}   [n] {}   (esc / backdrop to dismiss)",
            props.confirm_label, props.cancel_label
        ));
        lines
    }

    fn badge(&self, kind: DialogKind) -> String {
        let (icon, ansi) = match kind {
            DialogKind::Info => ("i", "36"),
            DialogKind::Warning => ("!", "33"),
            DialogKind::Error => ("x", "31"),
            DialogKind::Success => ("\u{2713}", "32"),
        };
        if self.color {
            format!("\x1B[{ansi}m[{icon}]\x1B[0m")
        } else {
            format!("[{icon}]")
        }
    }
}

impl DialogRenderer for ConsoleDialogRenderer {
    fn render(&mut self, props: &DialogProps, _controls: &DialogControls) {
        if !props.visible {
            if self.verbose {
                tracing::debug!(target: "dialog", "Dialog hidden");
            }
            return;
        }

        if let Some(id) = props.id {
            tracing::info!(
                target: "dialog",
                confirmation_id = %id,
                kind = %props.kind,
                "Awaiting confirmation: {}",
                props.message
            );
        }
        for line in self.format_lines(props) {
            eprintln!("{line}");
        }
    }
}

impl Default for ConsoleDialogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleDialogRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleDialogRenderer")
            .field("verbose", &self.verbose)
            .field("color", &self.color)
            .finish()
    }
}
