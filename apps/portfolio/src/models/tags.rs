//! Typed tags attached to career records, and the icon each one resolves to.
//!
//! The page picks icons from these enums rather than matching company names or
//! responsibility strings at render time.

use serde::{Deserialize, Serialize};

/// Icons available to the profile page. Serialized as the icon identifier the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Anchor,
    BarChart,
    Binary,
    Briefcase,
    Calculator,
    Car,
    ClipboardList,
    Code,
    Cpu,
    Crown,
    Database,
    Factory,
    FileText,
    GanttChart,
    Gauge,
    Globe,
    GraduationCap,
    HeartHandshake,
    MessageSquare,
    Network,
    Package,
    Plane,
    Settings,
    Shield,
    Ship,
    Target,
    Users,
    Wrench,
}

/// Employer of an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployerTag {
    Instron,
    AhAutomation,
    SiemensEnergy,
    DekraIndustrial,
    Trafikverket,
    PerssonInnovation,
    OrebroKommun,
    ShippingLine,
    RoyalSwedishNavy,
    WarehouseWork,
    Teaching,
    #[default]
    Other,
}

impl EmployerTag {
    /// Key technical employers count double when the summary scorer matches positions.
    pub fn is_key_technical(self) -> bool {
        matches!(
            self,
            EmployerTag::Instron | EmployerTag::AhAutomation | EmployerTag::SiemensEnergy
        )
    }

    pub fn icon(self) -> IconKind {
        match self {
            EmployerTag::Instron => IconKind::Car,
            EmployerTag::AhAutomation => IconKind::Binary,
            EmployerTag::SiemensEnergy => IconKind::Plane,
            EmployerTag::DekraIndustrial => IconKind::Calculator,
            EmployerTag::Trafikverket => IconKind::Anchor,
            EmployerTag::PerssonInnovation => IconKind::Crown,
            EmployerTag::OrebroKommun => IconKind::Factory,
            EmployerTag::ShippingLine => IconKind::Ship,
            EmployerTag::RoyalSwedishNavy => IconKind::Shield,
            EmployerTag::WarehouseWork => IconKind::Package,
            EmployerTag::Teaching => IconKind::GraduationCap,
            EmployerTag::Other => IconKind::Wrench,
        }
    }
}

/// Display group of a responsibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsibilityKind {
    EngineeringSystems,
    SoftwareProgramming,
    ManagementLeadership,
    QualitySafety,
    DocumentationAnalysis,
    MaritimeMilitary,
}

/// A responsibility tag from the fixed vocabulary, resolved to its group and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsibilityTag {
    pub kind: ResponsibilityKind,
    pub icon: IconKind,
}

impl ResponsibilityTag {
    /// Resolves a responsibility string. Strings outside the vocabulary have no tag.
    pub fn classify(responsibility: &str) -> Option<Self> {
        use IconKind as I;
        use ResponsibilityKind as K;

        let (kind, icon) = match responsibility {
            "Testing Systems Installation"
            | "System Installation"
            | "System Maintenance"
            | "System Repairs"
            | "Equipment Repair"
            | "Equipment Repairs"
            | "Equipment Handling"
            | "Equipment Overhaul"
            | "Equipment Maintenance"
            | "Preventive Maintenance"
            | "Basic Maintenance" => (K::EngineeringSystems, I::Wrench),
            "System Integration" => (K::EngineeringSystems, I::Network),
            "System Operations"
            | "System Optimization"
            | "Engine Operations"
            | "Engine Systems"
            | "Machinery Operations"
            | "Gas Turbine Systems"
            | "Technical Operations" => (K::EngineeringSystems, I::Settings),
            "Equipment Assessment" | "Equipment Calibration" => (K::EngineeringSystems, I::Gauge),
            "Dynamic Positioning" => (K::EngineeringSystems, I::Target),
            "Emergency Systems" => (K::EngineeringSystems, I::Shield),
            "Automation Systems" => (K::EngineeringSystems, I::Cpu),
            "Automation Design" => (K::EngineeringSystems, I::Binary),

            "IQOQ & Calibration" => (K::SoftwareProgramming, I::Gauge),
            "Bluehill Software" | "Software Configuration" => (K::SoftwareProgramming, I::Code),
            "PLC Programming" => (K::SoftwareProgramming, I::Cpu),
            "HMI Development" => (K::SoftwareProgramming, I::Settings),

            "Project Management" => (K::ManagementLeadership, I::Briefcase),
            "Team Leadership" | "Technical Leadership" | "Team Supervision"
            | "Team Coordination" => (K::ManagementLeadership, I::Users),
            "Resource Planning"
            | "Maintenance Planning"
            | "Technical Planning"
            | "Logistics Operations" => (K::ManagementLeadership, I::GanttChart),
            "Process Optimization" => (K::ManagementLeadership, I::Settings),
            "Inventory Management" => (K::ManagementLeadership, I::Database),
            "International Operations" => (K::ManagementLeadership, I::Globe),

            "Quality Control" | "Quality Assurance" | "Quality Standards"
            | "Industrial Inspections" => (K::QualitySafety, I::Target),
            "Safety Protocols" | "Safety Compliance" | "Safety Standards"
            | "Emergency Response" => (K::QualitySafety, I::Shield),
            "Regulatory Standards" => (K::QualitySafety, I::ClipboardList),

            "Technical Documentation" | "Documentation" => {
                (K::DocumentationAnalysis, I::FileText)
            }
            "Data Analysis" => (K::DocumentationAnalysis, I::BarChart),
            "Technical Training" | "Client Training" | "Practical Training" => {
                (K::DocumentationAnalysis, I::Users)
            }
            "Technical Support" | "Client Relations" => {
                (K::DocumentationAnalysis, I::HeartHandshake)
            }

            "Military Operations" | "Military Training" => (K::MaritimeMilitary, I::Shield),
            "Maritime Operations" | "Cargo Systems" => (K::MaritimeMilitary, I::Ship),

            _ => return None,
        };

        Some(Self { kind, icon })
    }
}

/// Skill groups shown in the "Professional Skills" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillGroup {
    EngineeringSystems,
    SoftwareProgramming,
    TestingQuality,
    ProjectManagement,
    Communication,
}

impl SkillGroup {
    pub const ALL: [SkillGroup; 5] = [
        SkillGroup::EngineeringSystems,
        SkillGroup::SoftwareProgramming,
        SkillGroup::TestingQuality,
        SkillGroup::ProjectManagement,
        SkillGroup::Communication,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillGroup::EngineeringSystems => "Engineering & Systems",
            SkillGroup::SoftwareProgramming => "Software & Programming",
            SkillGroup::TestingQuality => "Testing & Quality",
            SkillGroup::ProjectManagement => "Project Management",
            SkillGroup::Communication => "Communication",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            SkillGroup::EngineeringSystems => IconKind::Settings,
            SkillGroup::SoftwareProgramming => IconKind::Code,
            SkillGroup::TestingQuality => IconKind::Target,
            SkillGroup::ProjectManagement => IconKind::GanttChart,
            SkillGroup::Communication => IconKind::MessageSquare,
        }
    }

    pub fn members(self) -> &'static [&'static str] {
        match self {
            SkillGroup::EngineeringSystems => &[
                "Marine Engineering (Electrical, Mechanical)",
                "Gas Turbine Systems",
                "System Maintenance",
                "System Integration",
            ],
            SkillGroup::SoftwareProgramming => &[
                "Technical Systems Development (PLC, Python, Web)",
                "Software Configuration",
                "HMI Development",
                "Bluehill Suite",
                "Siemens TIA Portal",
                "Astea",
                "Amos",
                "Concur",
            ],
            SkillGroup::TestingQuality => &[
                "Testing & Calibration",
                "Quality Control",
                "Equipment Assessment",
                "Technical Documentation",
            ],
            SkillGroup::ProjectManagement => &[
                "Project Management",
                "Resource Planning",
                "Process Optimization",
                "Team Leadership",
            ],
            SkillGroup::Communication => &[
                "Global Communication",
                "Client Relations",
                "Technical Documentation",
                "Team Coordination",
            ],
        }
    }
}
