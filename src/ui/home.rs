/// Título de la página de inicio
pub const APP_TITLE: &str = "B.A.A Logística – Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    /// Vehicles, Loads y Trips todavía son páginas vacías
    pub implemented: bool,
}

pub static NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        title: "Drivers",
        path: "/drivers",
        description: "Manage drivers data",
        implemented: true,
    },
    NavSection {
        title: "Vehicles",
        path: "/vehicles",
        description: "Manage fleet vehicles",
        implemented: false,
    },
    NavSection {
        title: "Loads",
        path: "/loads",
        description: "Track and manage cargo",
        implemented: false,
    },
    NavSection {
        title: "Trips",
        path: "/trips",
        description: "Plan and follow trips",
        implemented: false,
    },
];
