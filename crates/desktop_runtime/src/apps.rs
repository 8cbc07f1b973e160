use crate::model::{AppId, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub icon: &'static str,
    /// Fixed window size; `None` means the size follows the desktop surface.
    pub default_size: Option<WindowSize>,
    pub show_on_desktop: bool,
}

impl AppDescriptor {
    pub fn name(&self) -> &'static str {
        self.app_id.name()
    }
}

const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: AppId::Portfolio,
        icon: "📄",
        default_size: None,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        icon: "📝",
        default_size: None,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::MemoryTest,
        icon: "🧠",
        default_size: None,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        icon: "🧮",
        default_size: Some(WindowSize { w: 300, h: 400 }),
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Paint,
        icon: "🎨",
        default_size: None,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Weather,
        icon: "🌤️",
        default_size: None,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_id: AppId::Browser,
        icon: "🌐",
        default_size: None,
        show_on_desktop: false,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    // Every AppId variant has exactly one registry row, in declaration order.
    &APP_REGISTRY[app_id as usize]
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// A start menu tile. Tiles without an `app_id` are decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub app_id: Option<AppId>,
}

const fn pin(label: &'static str, icon: &'static str, app_id: Option<AppId>) -> PinnedEntry {
    PinnedEntry {
        label,
        icon,
        app_id,
    }
}

const PINNED_ENTRIES: [PinnedEntry; 20] = [
    pin("Edge", "🌐", Some(AppId::Browser)),
    pin("Word", "W", None),
    pin("Excel", "X", None),
    pin("PowerPoint", "P", None),
    pin("Outlook", "✉️", None),
    pin("Calendar", "📅", None),
    pin("Store", "🏪", None),
    pin("Photos", "🖼️", None),
    pin("Settings", "⚙️", None),
    pin("Calculator", "🧮", Some(AppId::Calculator)),
    pin("Notepad", "📝", Some(AppId::Notepad)),
    pin("Paint", "🎨", Some(AppId::Paint)),
    pin("Teams", "👥", None),
    pin("OneDrive", "☁️", None),
    pin("Spotify", "🎵", None),
    pin("VS Code", "💻", None),
    pin("Terminal", "🖥️", None),
    pin("Skype", "💬", None),
    pin("Weather", "🌤️", Some(AppId::Weather)),
    pin("Maps", "🗺️", None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedItem {
    pub name: &'static str,
    pub kind: &'static str,
    pub icon: &'static str,
}

const RECOMMENDED_ITEMS: [RecommendedItem; 8] = [
    RecommendedItem {
        name: "Document.txt",
        kind: "Recently added",
        icon: "📄",
    },
    RecommendedItem {
        name: "Project.pdf",
        kind: "Yesterday at 2:30 PM",
        icon: "📑",
    },
    RecommendedItem {
        name: "Meeting Notes.docx",
        kind: "Yesterday at 11:24 AM",
        icon: "📝",
    },
    RecommendedItem {
        name: "Budget.xlsx",
        kind: "Tuesday at 3:45 PM",
        icon: "📊",
    },
    RecommendedItem {
        name: "Presentation.pptx",
        kind: "Monday at 9:15 AM",
        icon: "🎭",
    },
    RecommendedItem {
        name: "Report.pdf",
        kind: "Last week",
        icon: "📊",
    },
    RecommendedItem {
        name: "Image001.jpg",
        kind: "Last month",
        icon: "🖼️",
    },
    RecommendedItem {
        name: "Resume.docx",
        kind: "Last month",
        icon: "📄",
    },
];

fn matches_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Pinned start menu tiles whose label contains `term`, ignoring case.
pub fn filter_pinned(term: &str) -> Vec<PinnedEntry> {
    PINNED_ENTRIES
        .iter()
        .copied()
        .filter(|entry| matches_term(entry.label, term))
        .collect()
}

/// Recommended items whose name or kind contains `term`, ignoring case.
pub fn filter_recommended(term: &str) -> Vec<RecommendedItem> {
    RECOMMENDED_ITEMS
        .iter()
        .copied()
        .filter(|item| matches_term(item.name, term) || matches_term(item.kind, term))
        .collect()
}

/// Overflow tray entries shown behind the taskbar chevron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayExtra {
    Network,
    Messages,
    Browser,
    Language,
}

impl TrayExtra {
    pub const ALL: [TrayExtra; 4] = [
        Self::Network,
        Self::Messages,
        Self::Browser,
        Self::Language,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::Messages => "Messages",
            Self::Browser => "Browser",
            Self::Language => "Language",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Network => "🌍",
            Self::Messages => "💬",
            Self::Browser => "🧭",
            Self::Language => "🈯",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_rows_follow_app_id_order() {
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
        assert_eq!(app_registry().len(), AppId::ALL.len());
    }

    #[test]
    fn only_calculator_has_a_fixed_size() {
        let fixed: Vec<AppId> = app_registry()
            .iter()
            .filter(|entry| entry.default_size.is_some())
            .map(|entry| entry.app_id)
            .collect();
        assert_eq!(fixed, vec![AppId::Calculator]);
    }

    #[test]
    fn desktop_icons_cover_the_pinned_desktop_apps() {
        let names: Vec<&str> = desktop_icon_apps().iter().map(|app| app.name()).collect();
        assert_eq!(
            names,
            vec!["Portfolio", "Notepad", "Memorytest", "Calculator", "Paint"]
        );
    }

    #[test]
    fn pinned_search_ignores_case() {
        let labels: Vec<&str> = filter_pinned("pO").iter().map(|pin| pin.label).collect();
        assert_eq!(labels, vec!["PowerPoint", "Spotify"]);
        assert_eq!(filter_pinned("").len(), 20);
    }

    #[test]
    fn recommended_search_matches_name_or_kind() {
        let by_kind: Vec<&str> = filter_recommended("last month")
            .iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(by_kind, vec!["Image001.jpg", "Resume.docx"]);

        let by_name: Vec<&str> = filter_recommended(".PDF").iter().map(|item| item.name).collect();
        assert_eq!(by_name, vec!["Project.pdf", "Report.pdf"]);
    }

    #[test]
    fn launchable_pins_point_at_registered_apps() {
        let launchable: Vec<AppId> = filter_pinned("")
            .into_iter()
            .filter_map(|pin| pin.app_id)
            .collect();
        assert_eq!(
            launchable,
            vec![
                AppId::Browser,
                AppId::Calculator,
                AppId::Notepad,
                AppId::Paint,
                AppId::Weather
            ]
        );
    }
}
