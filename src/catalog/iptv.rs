use super::Category;

#[derive(Debug)]
pub struct Channel {
    pub name: &'static str,
}

const fn ch(name: &'static str) -> Channel {
    Channel { name }
}

pub static CHANNEL_CATEGORIES: [Category<Channel>; 3] = [
    Category {
        name: "Noticias",
        icon: "🌐",
        items: &[
            ch("CNN Internacional"),
            ch("BBC World"),
            ch("Euronews"),
            ch("Al Jazeera"),
            ch("France 24"),
        ],
    },
    Category {
        name: "Entretenimiento",
        icon: "📺",
        items: &[
            ch("HBO"),
            ch("Netflix Originals"),
            ch("Discovery"),
            ch("National Geographic"),
            ch("Comedy Central"),
        ],
    },
    Category {
        name: "Deportes",
        icon: "📻",
        items: &[
            ch("ESPN"),
            ch("Fox Sports"),
            ch("Eurosport"),
            ch("Sky Sports"),
            ch("ESPN 2"),
        ],
    },
];
