//! Semantic colors for pages and components.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Text,
    SubtleText,
    Primary,
    Accent,
    Success,
    Danger,
    Info,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColors {
    pub text: Color,
    pub subtle_text: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub info: Color,
    pub muted: Color,
}

impl RoleColors {
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Text => self.text,
            Role::SubtleText => self.subtle_text,
            Role::Primary => self.primary,
            Role::Accent => self.accent,
            Role::Success => self.success,
            Role::Danger => self.danger,
            Role::Info => self.info,
            Role::Muted => self.muted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub roles: RoleColors,
}

impl Theme {
    pub fn style(&self, role: Role) -> Style {
        Style::default().fg(self.roles.color(role))
    }

    pub fn bold(&self, role: Role) -> Style {
        self.style(role).add_modifier(Modifier::BOLD)
    }

    /// Style of the focused input line.
    pub fn focused(&self) -> Style {
        self.style(Role::Accent).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "dakasa".into(),
            roles: RoleColors {
                text: Color::Rgb(0xee, 0xee, 0xee),
                subtle_text: Color::Rgb(0x9a, 0x9a, 0x9a),
                primary: Color::Rgb(0x38, 0x80, 0xff),
                accent: Color::Rgb(0x3d, 0xc2, 0xff),
                success: Color::Rgb(0x2d, 0xd3, 0x6f),
                danger: Color::Rgb(0xeb, 0x44, 0x5a),
                info: Color::Rgb(0xff, 0xc4, 0x09),
                muted: Color::Rgb(0x56, 0x56, 0x56),
            },
        }
    }
}
