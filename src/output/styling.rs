use console::style;

/// Styling helpers for terminal output
pub fn bright(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright()
}

pub fn bright_red(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright().red()
}

pub fn bright_yellow(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright().yellow()
}

pub fn cyan(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).cyan()
}

pub fn yellow(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).yellow()
}

pub fn magenta(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).magenta()
}

pub fn dim(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).dim()
}

pub fn blue_underlined(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).blue().underlined()
}
