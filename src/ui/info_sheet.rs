//! Static copy shown in the info panel, keyed by focus target.

use crate::interaction::FocusTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    Bullets(&'static [&'static str]),
    Paragraphs(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoSection {
    pub heading: &'static str,
    pub body:    SectionBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoSheet {
    pub title:       &'static str,
    pub description: &'static str,
    pub specs:       &'static [SpecItem],
    pub features:    &'static [&'static str],
    pub sections:    &'static [InfoSection],
}

/// One rendered row of the panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLine {
    Paragraph(&'static str),
    Heading(&'static str),
    Spec(SpecItem),
    Bullet(&'static str),
}

const PLANET_SHEET: InfoSheet = InfoSheet {
    title:       "M.A.R. Project",
    description: "Our mission is to make 2 rovers which can work together and explore the Martian surface.",
    specs:       &[],
    features:    &[],
    sections:    &[
        InfoSection {
            heading: "Mission Objectives",
            body:    SectionBody::Bullets(&[
                "Map unexplored regions of Mars",
                "Collect geological samples",
                "Study Martian climate patterns",
                "Search for signs of past water",
                "Test autonomous navigation systems",
            ]),
        },
        InfoSection {
            heading: "Project Timeline",
            body:    SectionBody::Paragraphs(&[
                "Phase 1: Design and prototyping (Current)",
                "Phase 2: Testing in Mars-like environments",
                "Phase 3: Mission deployment planning",
            ]),
        },
    ],
};

const LEGGED_ROVER_SHEET: InfoSheet = InfoSheet {
    title:       "Quadruped Rover",
    description: "A four-legged autonomous rover designed for complex Martian terrain navigation.",
    specs:       &[
        SpecItem {
            label: "Type",
            value: "Quadruped Walker",
        },
        SpecItem {
            label: "Legs",
            value: "4 Articulated Legs",
        },
        SpecItem {
            label: "Terrain",
            value: "Rocky & Steep Surface",
        },
        SpecItem {
            label: "Sensors",
            value: "Stereo Vision Cameras",
        },
        SpecItem {
            label: "Power",
            value: "Solar + Battery Hybrid",
        },
        SpecItem {
            label: "Speed",
            value: "0.5 m/s Average",
        },
    ],
    features:    &[
        "Advanced stability control for uneven terrain",
        "Independent leg movement for obstacle traversal",
        "Real-time environment mapping",
        "Autonomous navigation system",
    ],
    sections:    &[],
};

const WHEELED_ROVER_SHEET: InfoSheet = InfoSheet {
    title:       "Speedy Rover",
    description: "A wheeled high-speed rover optimized for fast exploration and sample collection across Martian plains.",
    specs:       &[
        SpecItem {
            label: "Type",
            value: "Wheeled Explorer",
        },
        SpecItem {
            label: "Wheels",
            value: "6 Independent Wheels",
        },
        SpecItem {
            label: "Terrain",
            value: "Plains & Flat Surfaces",
        },
        SpecItem {
            label: "Sensors",
            value: "Multi-Spectral Cameras",
        },
        SpecItem {
            label: "Power",
            value: "Solar Panel Array",
        },
    ],
    features:    &[
        "High-speed long-distance traversal",
        "Sample collection arm system",
        "GPS and inertial navigation",
    ],
    sections:    &[],
};

impl InfoSheet {
    pub const fn for_target(target: FocusTarget) -> Option<&'static Self> {
        match target {
            FocusTarget::None => None,
            FocusTarget::Planet => Some(&PLANET_SHEET),
            FocusTarget::LeggedRover => Some(&LEGGED_ROVER_SHEET),
            FocusTarget::WheeledRover => Some(&WHEELED_ROVER_SHEET),
        }
    }

    /// Description, then specifications, key features and free-form sections, each
    /// block skipped when empty.
    pub fn lines(&self) -> Vec<SheetLine> {
        let mut lines = vec![SheetLine::Paragraph(self.description)];

        if !self.specs.is_empty() {
            lines.push(SheetLine::Heading("Specifications"));
            lines.extend(self.specs.iter().copied().map(SheetLine::Spec));
        }
        if !self.features.is_empty() {
            lines.push(SheetLine::Heading("Key Features"));
            lines.extend(self.features.iter().copied().map(SheetLine::Bullet));
        }
        for section in self.sections {
            lines.push(SheetLine::Heading(section.heading));
            match section.body {
                SectionBody::Bullets(items) => lines.extend(items.iter().copied().map(SheetLine::Bullet)),
                SectionBody::Paragraphs(items) => {
                    lines.extend(items.iter().copied().map(SheetLine::Paragraph));
                },
            }
        }
        lines
    }
}
