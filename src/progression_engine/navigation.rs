use serde::{Deserialize, Serialize};

/// Dashboard menu tree: a link or a titled group of further items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuItem {
    Leaf {
        title: String,
        url: String,
        icon: String,
    },
    Group {
        title: String,
        icon: String,
        children: Vec<MenuItem>,
    },
}

impl MenuItem {
    pub fn leaf(title: &str, url: &str, icon: &str) -> Self {
        MenuItem::Leaf { title: title.into(), url: url.into(), icon: icon.into() }
    }

    pub fn group(title: &str, icon: &str, children: Vec<MenuItem>) -> Self {
        MenuItem::Group { title: title.into(), icon: icon.into(), children }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuItem::Leaf { title, .. } | MenuItem::Group { title, .. } => title,
        }
    }

    /// Every link under this item, depth first.
    pub fn leaf_urls(&self) -> Vec<&str> {
        match self {
            MenuItem::Leaf { url, .. } => vec![url.as_str()],
            MenuItem::Group { children, .. } => children.iter().flat_map(|c| c.leaf_urls()).collect(),
        }
    }

    /// Titles from this item down to the leaf for `url`.
    pub fn breadcrumb(&self, url: &str) -> Option<Vec<&str>> {
        match self {
            MenuItem::Leaf { title, url: own, .. } => (own == url).then(|| vec![title.as_str()]),
            MenuItem::Group { title, children, .. } => children.iter().find_map(|c| {
                c.breadcrumb(url).map(|mut trail| {
                    trail.insert(0, title.as_str());
                    trail
                })
            }),
        }
    }
}

/// Breadcrumb across a whole menu.
pub fn find_breadcrumb<'a>(menu: &'a [MenuItem], url: &str) -> Option<Vec<&'a str>> {
    menu.iter().find_map(|item| item.breadcrumb(url))
}

/// The standard tahfidz/tilawah dashboard menu.
pub fn dashboard_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("Dashboard", "/dashboard", "home"),
        MenuItem::group(
            "Tahfidz",
            "book",
            vec![
                MenuItem::leaf("Setoran Harian", "/tahfidz/harian", "calendar"),
                MenuItem::leaf("Drill", "/tahfidz/drill", "repeat"),
                MenuItem::leaf("Tasmi'", "/tahfidz/tasmi", "mic"),
                MenuItem::leaf("Ujian Juz", "/tahfidz/ujian", "clipboard"),
            ],
        ),
        MenuItem::group(
            "Tilawah",
            "book-open",
            vec![
                MenuItem::leaf("Tilawah Harian", "/tilawah/harian", "calendar"),
                MenuItem::leaf("Ujian Kenaikan Jilid", "/tilawah/ujian", "award"),
            ],
        ),
        MenuItem::group(
            "Laporan",
            "bar-chart",
            vec![
                MenuItem::leaf("Target Kelas", "/laporan/target", "target"),
                MenuItem::leaf("Rekap Siswa", "/laporan/siswa", "users"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumb_walks_groups() {
        let menu = dashboard_menu();
        assert_eq!(find_breadcrumb(&menu, "/tahfidz/tasmi"), Some(vec!["Tahfidz", "Tasmi'"]));
        assert_eq!(find_breadcrumb(&menu, "/dashboard"), Some(vec!["Dashboard"]));
        assert_eq!(find_breadcrumb(&menu, "/nowhere"), None);
    }

    #[test]
    fn leaf_urls_are_unique() {
        let menu = dashboard_menu();
        let urls: Vec<&str> = menu.iter().flat_map(|m| m.leaf_urls()).collect();
        let unique: std::collections::HashSet<&str> = urls.iter().copied().collect();
        assert_eq!(urls.len(), unique.len());
        assert_eq!(urls.len(), 9);
    }

    #[test]
    fn serialises_with_type_tag() {
        let json = serde_json::to_value(MenuItem::leaf("Drill", "/tahfidz/drill", "repeat")).unwrap();
        assert_eq!(json["type"], "leaf");
        let back: MenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.title(), "Drill");
    }
}
