use std::fmt;

/// Services reachable from the home dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceId {
    Promotions,
    Iptv,
    Movie,
    Menu,
    Music,
    Flights,
}

impl ServiceId {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Promotions => "promotions",
            ServiceId::Iptv => "iptv",
            ServiceId::Movie => "movie",
            ServiceId::Menu => "menu",
            ServiceId::Music => "music",
            ServiceId::Flights => "flights",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon on the dashboard navigation bar.
#[derive(Debug)]
pub struct Service {
    pub id: ServiceId,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        id: ServiceId::Promotions,
        label: "Promociones",
        icon: "🎁",
    },
    Service {
        id: ServiceId::Iptv,
        label: "TV",
        icon: "📺",
    },
    Service {
        id: ServiceId::Movie,
        label: "Movie",
        icon: "🎬",
    },
    Service {
        id: ServiceId::Menu,
        label: "Servicios",
        icon: "🍴",
    },
    Service {
        id: ServiceId::Music,
        label: "Music",
        icon: "🎵",
    },
    Service {
        id: ServiceId::Flights,
        label: "Vuelos",
        icon: "✈️",
    },
];

#[derive(Debug)]
pub struct Promotion {
    pub title: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

pub static PROMOTIONS: [Promotion; 4] = [
    Promotion {
        title: "Spa & Wellness",
        description: "20% de descuento en tratamientos de spa",
        note: "Válido hasta fin de mes",
    },
    Promotion {
        title: "Restaurante",
        description: "Cena romántica para dos personas",
        note: "Incluye copa de champagne",
    },
    Promotion {
        title: "Tours",
        description: "Excursión guiada por la ciudad",
        note: "Salidas diarias a las 10:00",
    },
    Promotion {
        title: "Gimnasio",
        description: "Acceso completo a nuestras instalaciones",
        note: "Abierto 24/7 para huéspedes",
    },
];
