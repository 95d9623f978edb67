//! Editorial content of the bulletins
//!
//! Seasonal outlooks, crop stages and advisories are issued by forecasters,
//! not computed; they live here as tables.

use crate::models::Priority;
use crate::types::AlertLevel;

pub const SEASON: &str = "2024-2025";

/// (month, precipitation mm, temperature °C)
pub const SEASONAL_OUTLOOK: [(&str, i64, i64); 6] = [
    ("Mai", 120, 28),
    ("Juin", 180, 26),
    ("Juillet", 200, 25),
    ("Août", 250, 24),
    ("Septembre", 180, 26),
    ("Octobre", 100, 29),
];

pub const SEASONAL_TRENDS: [(AlertLevel, &str); 3] = [
    (AlertLevel::Success, "Saison favorable pour les cultures de riz"),
    (AlertLevel::Warning, "Attention aux variations pluviométriques en juillet"),
    (AlertLevel::Info, "Recommandation : Planifier les semis pour mi-mai"),
];

/// (label, probability %, change in points)
pub const SEASON_PROBABILITIES: [(&str, i64, i64); 3] = [
    ("Saison normale", 65, 5),
    ("Saison sèche", 20, -3),
    ("Saison humide", 15, -2),
];

pub const CROP: &str = "Riz";

/// (stage, crop coefficient, satisfaction %)
pub const CROP_STAGES: [(&str, &str, i64); 3] = [
    ("Début croissance", "Kc=0.3-0.5", 85),
    ("Croissance végétative", "Kc=0.8", 72),
    ("Phase reproductive", "Kc=1.2", 91),
];

pub const SOWING_WINDOWS: [&str; 3] = [
    "Semis précoce : 15-30 Mai 2024",
    "Semis normal : 1-15 Juin 2024",
    "Semis tardif : 16-30 Juin 2024",
];

/// (day, rain mm) for the coming week
pub const WEEK_RAIN_OUTLOOK: [(&str, i64); 7] = [
    ("Lun", 5),
    ("Mar", 12),
    ("Mer", 0),
    ("Jeu", 8),
    ("Ven", 15),
    ("Sam", 3),
    ("Dim", 7),
];

pub const FIELD_CAPACITY_MM: i64 = 100;

pub const RICE_ADVICE: [&str; 5] = [
    "Préparation des champs : Conditions favorables pour le labour",
    "Semis : Période optimale pour les variétés précoces",
    "Irrigation : Maintenir 5cm d'eau dans les rizières",
    "Travaux : Éviter les interventions mécaniques lourdes",
    "Fertilisation : Apporter l'engrais de fond avant repiquage",
];

pub const FOOD_CROP_ADVICE: [(AlertLevel, &str); 5] = [
    (AlertLevel::Warning, "Maïs : Reporter les semis de 7 jours"),
    (AlertLevel::Success, "Igname : Conditions favorables pour la plantation"),
    (AlertLevel::Success, "Légumineuses : Période idéale pour le semis"),
    (AlertLevel::Success, "Protection : Installer des brise-vents si nécessaire"),
    (AlertLevel::Success, "Phytosanitaire : Surveiller les attaques de chenilles"),
];

/// (level, hazard, recommendation)
pub const URGENT_ALERTS: [(AlertLevel, &str, &str); 3] = [
    (
        AlertLevel::Warning,
        "Fort risque de pluies intenses",
        "Sécuriser les récoltes en cours de séchage",
    ),
    (
        AlertLevel::Error,
        "Vents forts prévus",
        "Renforcer les tuteurages des jeunes plants",
    ),
    (
        AlertLevel::Info,
        "Période sèche prolongée",
        "Planifier l'irrigation des cultures sensibles",
    ),
];

/// (week, activity, expected weather, priority)
pub const CALENDAR: [(&str, &str, &str, Priority); 4] = [
    (
        "Semaine 1",
        "Préparation des pépinières de riz",
        "Pluviosité modérée attendue",
        Priority::High,
    ),
    (
        "Semaine 2",
        "Semis des légumineuses de saison",
        "Conditions sèches favorables",
        Priority::Medium,
    ),
    (
        "Semaine 3",
        "Repiquage du riz (variétés précoces)",
        "Retour des pluies régulières",
        Priority::High,
    ),
    (
        "Semaine 4",
        "Premier sarclage des cultures installées",
        "Alternance soleil-pluie",
        Priority::Medium,
    ),
];
