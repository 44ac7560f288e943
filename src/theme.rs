// =============== Imports ================
use console::Style;
use dialoguer::theme::Theme;
use std::fmt;

// Base: Dialoguer Simple Theme
// Only the search prompt uses it, the rest of the trait stays on dialoguer's defaults
// Changes are noted in the comments

pub struct CustomTheme {}

impl Theme for CustomTheme {
    // Prompts are going to be Bold and Cyan
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        let prompt_style = Style::new().cyan().bold();
        write!(f, "{}", prompt_style.apply_to(prompt))
    }

    // Left on default settings, but leaves a trace in the log
    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        log::debug!("Formatting error: {}", err);
        write!(f, "error: {}", err)
    }

    // Same colors as the prompt, default shown in brackets
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        let prompt_style = Style::new().cyan().bold();
        match default {
            Some(default) if prompt.is_empty() => write!(f, "[{}]: ", default),
            Some(default) => write!(f, "{} [{}]: ", prompt_style.apply_to(prompt), default),
            None => write!(f, "{}: ", prompt_style.apply_to(prompt)),
        }
    }

    // The submitted query is echoed dimmed
    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        let prompt_style = Style::new().cyan().bold();
        write!(f, "{}: {}", prompt_style.apply_to(prompt), Style::new().dim().apply_to(sel))
    }
}
