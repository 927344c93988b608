use super::Category;

/// Room-service dish, hotel service or facility.
#[derive(Debug)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
    /// Preparation time or opening hours.
    pub time: &'static str,
    pub description: &'static str,
}

const fn item(
    name: &'static str,
    price: &'static str,
    time: &'static str,
    description: &'static str,
) -> MenuItem {
    MenuItem {
        name,
        price,
        time,
        description,
    }
}

pub static MENU_CATEGORIES: [Category<MenuItem>; 3] = [
    Category {
        name: "Room Service",
        icon: "🍽️",
        items: &[
            item(
                "Desayuno Continental",
                "€25",
                "30-45 min",
                "Croissants, café, jugos naturales",
            ),
            item(
                "Hamburguesa Gourmet",
                "€18",
                "20-30 min",
                "Carne Angus, papas fritas, ensalada",
            ),
            item(
                "Salmón a la Plancha",
                "€32",
                "25-35 min",
                "Con verduras al vapor y arroz basmati",
            ),
            item(
                "Pasta Carbonara",
                "€16",
                "15-25 min",
                "Pasta fresca con salsa cremosa y panceta",
            ),
        ],
    },
    Category {
        name: "Servicios de Hotel",
        icon: "📞",
        items: &[
            item(
                "Servicio de Lavandería",
                "€15",
                "24h",
                "Recogida y entrega en habitación",
            ),
            item(
                "Spa & Wellness",
                "€80",
                "60-90 min",
                "Masaje relajante y acceso a sauna",
            ),
            item(
                "Transfer al Aeropuerto",
                "€45",
                "En demanda",
                "Servicio de taxi privado",
            ),
            item(
                "Cena Romántica",
                "€120",
                "2h",
                "Cena privada para dos en terraza",
            ),
        ],
    },
    Category {
        name: "Facilidades",
        icon: "📶",
        items: &[
            item(
                "Internet WiFi Premium",
                "Gratis",
                "24/7",
                "Conexión de alta velocidad",
            ),
            item(
                "Gimnasio",
                "Gratis",
                "06:00-23:00",
                "Equipamiento moderno y personal trainer",
            ),
            item(
                "Piscina & Terraza",
                "Gratis",
                "08:00-22:00",
                "Piscina infinity con vista al mar",
            ),
            item(
                "Estacionamiento",
                "€20/día",
                "24h",
                "Plaza cubierta con seguridad",
            ),
        ],
    },
];
