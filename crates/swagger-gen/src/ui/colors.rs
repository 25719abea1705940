use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// RGB triples for each role, per background.
struct Palette {
  muted: (u8, u8, u8),
  label: (u8, u8, u8),
  value: (u8, u8, u8),
  accent: (u8, u8, u8),
  success: (u8, u8, u8),
  error: (u8, u8, u8),
}

const DARK: Palette = Palette {
  muted: (128, 150, 160),
  label: (110, 190, 225),
  value: (235, 215, 120),
  accent: (200, 130, 220),
  success: (120, 200, 140),
  error: (235, 100, 90),
};

const LIGHT: Palette = Palette {
  muted: (100, 110, 120),
  label: (20, 95, 150),
  value: (140, 95, 20),
  accent: (130, 50, 150),
  success: (30, 125, 60),
  error: (180, 40, 30),
};

/// Terminal colors for the CLI. Every role resolves to `Color::Reset` when
/// color output is off.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, rgb: (u8, u8, u8)) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Rgb {
      r: rgb.0,
      g: rgb.1,
      b: rgb.2,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().muted)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  /// Help-screen styling, always drawn from the dark palette.
  pub const fn clap_styles() -> Styles {
    const fn rgb(rgb: (u8, u8, u8)) -> Option<ClapColor> {
      Some(ClapColor::Rgb(RgbColor(rgb.0, rgb.1, rgb.2)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(rgb(DARK.label)))
      .usage(Style::new().bold().fg_color(rgb(DARK.label)))
      .literal(Style::new().fg_color(rgb(DARK.success)))
      .placeholder(Style::new().fg_color(Some(ClapColor::Ansi(AnsiColor::BrightBlack))))
      .error(Style::new().bold().fg_color(rgb(DARK.error)))
      .valid(Style::new().fg_color(rgb(DARK.success)))
      .invalid(Style::new().bold().fg_color(rgb(DARK.error)))
  }
}

/// Converts terminal colors for table cells.
pub trait IntoComfyColor {
  fn into_comfy(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into_comfy(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
      _ => ComfyColor::Reset,
    }
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => std::env::var("COLORFGBG")
      .ok()
      .and_then(|value| theme_from_colorfgbg(&value))
      .unwrap_or(Theme::Dark),
  }
}

/// Reads the background slot of `COLORFGBG` (`"15;0"` is light text on black).
/// Palette indices 7 and up are light backgrounds.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
  Some(if background >= 7 && background != 8 {
    Theme::Light
  } else {
    Theme::Dark
  })
}
