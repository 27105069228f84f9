//! Fixed copy of the pitch page.
//!
//! Card labels and descriptions are plain text and get escaped on output.
//! Bullets, process steps and table cells are curated HTML fragments
//! (they carry `<b>` emphasis) and are emitted verbatim.

/// A benefit or challenge card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const fn card(label: &'static str, description: &'static str, icon: &'static str) -> Card {
    Card {
        label,
        description,
        icon,
    }
}

pub const BENEFITS: &[Card] = &[
    card("Wirtschaftlichkeit", "Senkung der Betriebskosten, Steigerung der Produktivität und Erträge", "💰"),
    card("Nachhaltigkeit", "Umweltschonend & verbesserter Ressourceneinsatz", "🌱"),
    card(
        "Autarkiegrad und Resilienz",
        "offline-fähig & anbieterunabhängig & potenziell stromnetzunabhängig & einsetzbar in abgelegenen Regionen",
        "📡",
    ),
    card(
        "Kosteneffizienz und Energiesparsamkeit",
        "geringe Initialkosten & niedrige laufende Kosten & geringer Stromverbrauch der LoRaWAN-basierten Kameras",
        "💡",
    ),
    card("Schnelligkeit", "zeitnahe Daten 24/7 und Entscheidungen möglich", "⏱️"),
    card("Datenhoheit", "lokale KI (Edge AI) & lokale Datenspeicherung", "🔒"),
    card(
        "Skalier- und Erweiterbarkeit",
        "modularer Aufbau & ergänzende Sensoren (z. B. Multisensor für Bodendaten) möglich & für kleine und große Betriebe geeignet",
        "🧩",
    ),
    card("Lebensmittelsicherheit", "sicherere Lebensmittel durch genaues, nachvollziehbares Monitoring", "🥗"),
    card("Nachvollziehbarkeit", "Datengetriebene, transparente Entscheidungen möglich", "📚"),
    card(
        "Planbarkeit",
        "frühere und genauere Erntevorhersage sowie Einkaufbedarfs- und Umsatzprognosen",
        "🔮",
    ),
    card("Reproduzierbarkeit", "verfügbare, marktzugängliche Hardware & Open Source", "🔄"),
];

pub const CHALLENGES: &[Card] = &[
    card(
        "Hardware",
        "Integration & Kommunikation der Komponenten (Sensorik, Gateway/Server, Zugriffsgeräte)",
        "🔗",
    ),
    card(
        "KI-Modellgüte und -Kalibrierung",
        "Bilder und ML-Modelle müssen für geringe Rechenkapazität komprimiert werden & Modellanpassungen für unterschiedl. Anwendungsfälle (z. B. Früchte, Installationsorte) nötig",
        "🧠",
    ),
    card("Datenqualität", "Störungen oder Ausfälle können zu Datenlücken führen", "📉"),
    card(
        "Echtzeitfähigkeit",
        "Pflanzenbeobachtung nur zu definierten Zeiten, um Energieverbrauch zu minimieren",
        "⏳",
    ),
    card("Wartung", "Batteriewechsel und ggfs. Updates vor Ort nötig", "🛠️"),
    card(
        "Akzeptanz",
        "Einweisung für Visualisierungen erforderlich & Annahme der Technik in Arbeitsprozesse",
        "👨‍🌾",
    ),
    card(
        "Opt. Energieautarkie",
        "Energieverbrauch, Konfiguration von Sleepy Server, Solarmodulinstallation",
        "🔋",
    ),
];

pub const SUBTITLE: &str = "Ein Projekt zur intelligenten Nahrungsmittelüberwachung durch KI-Kamerasysteme – lokal, unabhängig und zukunftsfähig.";

/// Pressure factors listed in the "Ausgangszustand" panel
pub const PRESSURE_FACTORS: &[&str] = &[
    "Klimawandel",
    "Ressourcenknappheit (z. B. Wasser)",
    "Preisvolatilitäten und Marktschwankungen",
    "Geopolitische Spannungen",
    "Störungen in Lieferketten",
    "Stromausfälle und Energieengpässe",
    "Unterbrechungen in der Kommunikationsinfrastruktur (Internet/Mobilfunk)",
    "Zunehmende Bedrohung durch Cyberangriffe",
];

pub const PRESSURE_INTRO: &str = "Die Landwirtschaft steht zunehmend unter Druck – ausgelöst durch:";

pub const PRESSURE_OUTRO: &str = "Gleichzeitig steigt die weltweite Nachfrage nach Nahrungsmitteln – bei wachsendem Anspruch an Nachhaltigkeit und Umweltschutz.";

pub const GUIDING_QUESTIONS: &[&str] = &[
    "Wie kann kritische Infrastruktur wie die Nahrungsmittelversorgung präziser, resilienter und effizienter überwacht werden?",
    "Wie kann man gleichzeitig konkrete Handlungsempfehlungen ableiten, die zu nachhaltigem Nutzen (ökologisch, ökonomisch, gesellschaftlich) führen?",
];

/// A tab of the solution section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub title: &'static str,
}

pub const TABS: &[Tab] = &[
    Tab {
        id: "technologie",
        title: "🛠️ Technologie",
    },
    Tab {
        id: "ablauf",
        title: "⚙️ Ablauf",
    },
];

pub const TECHNOLOGY_HEADER: &str =
    "Lokales Netzwerk mit Edge AI & LoRaWAN/WiFi - optional mit Internetanbindung und energieautark";

pub const ARCHITECTURE_CAPTION: &str = "Beispielhafter technischer Aufbau";

/// A bullet with an optional nested list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub html: &'static str,
    pub children: &'static [&'static str],
}

const fn bullet(html: &'static str) -> Bullet {
    Bullet { html, children: &[] }
}

/// Colour-coded option box below a feature column's bullets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Optional internet / remote access
    Connectivity,
    /// Optional solar operation
    Energy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub kind: NoteKind,
    pub html: &'static str,
}

/// One of the three columns of the technology tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureColumn {
    pub icon: &'static str,
    pub title: &'static str,
    pub bullets: &'static [Bullet],
    pub notes: &'static [Note],
    pub footnotes: &'static [&'static str],
}

pub const FEATURE_COLUMNS: &[FeatureColumn] = &[
    FeatureColumn {
        icon: "📡",
        title: "Sensorsystem",
        bullets: &[
            bullet("<b>AI-Kamera</b> mit integriertem LoRa-Transceiver oder integriertem WiFi"),
            bullet("<b>Lokale KI-Verarbeitung (Edge AI)</b> auf der Kamera mittels integrierter Tools wie TensorFlow Lite Micro oder PyTorch"),
            bullet("<b>Datenübertragung</b> zu definierten Zeiten über energieeffizientes LoRaWAN (bis 10 km Reichweite) oder WiFi (hohe Bandbreite)"),
            bullet("Zusätzliche Erprobung des Einsatzes von <b>verteiltem KI-Training (Federated Learning)</b> zur kontinuierlichen Verbesserung der Modelle möglich"),
            bullet("<b>Stromversorgung</b> via Batterie (LoRaWAN-basierte Kamera) oder via Netzstrom (WiFi-basierte Kamera)"),
        ],
        notes: &[Note {
            kind: NoteKind::Energy,
            html: "Optional: Solarbetrieb bei WiFi-Kameras für Energieautarkie*",
        }],
        footnotes: &[
            "* Solarbetrieb ist bei LoRaWAN-basierten Kameras nicht nötig.",
            "** Hierzu ist eine separate SIM-Karte nötig.",
        ],
    },
    FeatureColumn {
        icon: "🖥️",
        title: "Gateway & Server",
        bullets: &[
            bullet("Ein einzelnes Gerät auf Basis des Raspberry Pi, das <b>sowohl als Gateway als auch als zentraler Server</b> dient."),
            bullet("Gateway beinhaltet <b>LoRa-Transceiver, WLAN-Modul, LTE-Modul und SSD-Speicher</b>"),
            bullet("Vorinstalliertes Linux mit Docker ermöglicht <b>einfache Konfiguration und Containerisierung</b>"),
            bullet("Software: ChirpStack (Network Server für LoRaWAN), MQTT Broker (Datenvermittlung), PostgreSQL/TimescaleDB (Datenbank), Grafana (Visualisierung)"),
            bullet("<b>Stromversorgung</b> via Netzstrom/Power over Ethernet (PoE)"),
        ],
        notes: &[
            Note {
                kind: NoteKind::Connectivity,
                html: "Optional: Internetanbindung über integriertes LTE-Modul** oder über mobilen LTE-Stick**",
            },
            Note {
                kind: NoteKind::Energy,
                html: "Optional: Solarbetrieb des Gateways/Servers für Energieautarkie",
            },
        ],
        footnotes: &[],
    },
    FeatureColumn {
        icon: "📱",
        title: "Zugriff & Nutzung",
        bullets: &[
            bullet("<b>Lokales WLAN</b> vom Gateway/Server bereitgestellt"),
            Bullet {
                html: "Gateway/Server fungiert als <b>zentraler Zugangspunkt</b>",
                children: &[
                    "Bei Netzstrombetrieb: Permanenter Zugriff auf Gateway/Server über das <b>lokale WLAN</b> per Smartphone, Tablet oder Laptop",
                    "Bei Solarbetrieb: Aktivierung des Gateways/Servers (Sleepy Server) bei Bedarf über <b>Wake-on-WLAN</b> per Smartphone, Tablet oder Laptop",
                ],
            },
            bullet("Bereitstellung einer <b>Datenvisualisierung (Dashboard)</b>, welche Pflanzenzustände nach Art, Ort und im Zeitverlauf anzeigt"),
            bullet("<b>Benachrichtigungen</b> und Alarme möglich"),
            bullet("<b>Keine Cloud- oder Internetverbindung</b> erforderlich"),
        ],
        notes: &[Note {
            kind: NoteKind::Connectivity,
            html: "Optional: Fernzugriff per Smartphone, Tablet oder Laptop mittels Internet (z.B. via lokalem WLAN-Router oder LTE-Modul**)",
        }],
        footnotes: &[],
    },
];

pub const PROCESS_STEPS: &[&str] = &[
    "<b>AI-Kamera</b> beobachtet Pflanzen in definierten Zeitabständen",
    "<b>TinyML-Modell</b> erkennt Fruchtanzahl und Pflanzenzustand (z. B. Reifegrad) direkt und lokal auf dem Edge-Gerät",
    "<b>Datenübertragung</b> erfolgt zu definierten Zeitpunkten an das lokale Gateway-/Serversystem",
    "<b>Gateway/Server</b> empfängt, speichert und visualisiert die Daten lokal",
    "<b>Zugriff</b> auf die Visualisierung erfolgt per Smartphone, Tablet oder Laptop über das lokale WLAN (bzw. optional über LTE)",
    "<b>Handlungsempfehlungen</b> können direkt vor Ort abgeleitet werden (z. B. Bewässern, Toppen, Ausdünnen, Auslichten, Ernten).",
];

/// A row of the optional project timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    pub span: &'static str,
    pub tasks: &'static [&'static str],
}

pub const PHASES: &[Phase] = &[
    Phase {
        name: "1. Konzeptphase",
        span: "Monat 1–3",
        tasks: &[
            "Literaturrecherche (TinyML, AI Cams, LoRaWAN etc.)",
            "Definition der Forschungsfrage",
            "Identifikation des Use Cases mit Praxispartner",
            "Auswahl/Anforderung der Geräte",
        ],
    },
    Phase {
        name: "2. Setup & Grundlagenaufbau",
        span: "Monat 4–6",
        tasks: &[
            "Aufsetzen von Gateway, MQTT-Broker, Serverstruktur",
            "Testsystem lokal: InfluxDB, Grafana, MQTT, TinyML-Training",
            "Prototyping mit AI-Kamera, Edge-Inferenz, Datenweiterleitung",
            "LoRaWAN-Grundlagen & initiale Tests",
        ],
    },
    Phase {
        name: "3. Integration beim Praxispartner (Pilotphase)",
        span: "Monat 7–12",
        tasks: &[
            "Gerätebereitstellung (Leihgabe)",
            "Anbindung an LoRaWAN + Gateway",
            "Datenfluss zum Server (MQTT + DB + Grafana)",
            "Feedbackschleifen mit Partner",
            "erste Messungen, Logging, Stabilität",
        ],
    },
    Phase {
        name: "4. Evaluation & Optimierung",
        span: "Monat 13–18",
        tasks: &[
            "Analyse der gesammelten Daten",
            "Optimierung TinyML-Modelle (evtl. Edge Retraining)",
            "Energieverbrauch, Latenz, Datenqualität analysieren",
            "Veröffentlichung erster Paper / Poster",
        ],
    },
    Phase {
        name: "5. Theoretische Vertiefung & Methodik",
        span: "Monat 18–30",
        tasks: &[
            "Tiefergehende Methodenarbeit (TinyML, Edge AI, Netzanalyse)",
            "Vergleich verschiedener Architekturen/Modelle",
            "ggf. Alternativen zum Setup evaluieren",
        ],
    },
    Phase {
        name: "6. Systematische Evaluation / Validierung",
        span: "Monat 30–36",
        tasks: &[
            "Gegenüberstellung mit anderen Systemen",
            "Langzeitauswertung",
            "Paper (konferenzfähig / journalfähig) schreiben",
        ],
    },
    Phase {
        name: "7. Publikationen & Dissertationsschreiben",
        span: "Monat 36–42",
        tasks: &[
            "Artikel zusammenfassen, neue Erkenntnisse",
            "Dissertation schreiben",
            "Verteidigung vorbereiten",
        ],
    },
];

/// Project name as written in the footer
pub const FOOTER_TITLE: &str = "Smarte und resiliente Landwirtschaft via Edge AI";

pub const DISCLAIMER: &str = "Hinweis: Dies ist ein Forschungsprojekt. Es verspricht keine kommerzielle Reife, sondern zielt auf Machbarkeitsnachweis, Dokumentation und Transfer.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_lists_have_fixed_counts() {
        assert_eq!(BENEFITS.len(), 11);
        assert_eq!(CHALLENGES.len(), 7);
    }

    #[test]
    fn test_cards_have_no_empty_fields() {
        for card in BENEFITS.iter().chain(CHALLENGES) {
            assert!(!card.label.is_empty());
            assert!(!card.description.is_empty());
            assert!(!card.icon.is_empty(), "{} has no icon", card.label);
        }
    }

    #[test]
    fn test_card_order_is_display_order() {
        assert_eq!(BENEFITS[0].label, "Wirtschaftlichkeit");
        assert_eq!(BENEFITS[10].label, "Reproduzierbarkeit");
        assert_eq!(CHALLENGES[0].label, "Hardware");
        assert_eq!(CHALLENGES[6].label, "Opt. Energieautarkie");
    }

    #[test]
    fn test_tabs_have_unique_ids() {
        assert_eq!(TABS.len(), 2);
        assert_ne!(TABS[0].id, TABS[1].id);
    }

    #[test]
    fn test_feature_columns() {
        assert_eq!(FEATURE_COLUMNS.len(), 3);
        assert_eq!(FEATURE_COLUMNS[0].footnotes.len(), 2);
        assert!(FEATURE_COLUMNS[2].bullets.iter().any(|b| b.children.len() == 2));
        assert_eq!(PROCESS_STEPS.len(), 6);
        assert_eq!(PHASES.len(), 7);
    }
}
