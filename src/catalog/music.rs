use super::Category;

#[derive(Debug)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub duration: &'static str,
}

const fn track(title: &'static str, artist: &'static str, duration: &'static str) -> Track {
    Track {
        title,
        artist,
        duration,
    }
}

pub static PLAYLISTS: [Category<Track>; 4] = [
    Category {
        name: "Relajación",
        icon: "🌊",
        items: &[
            track("Ocean Breeze", "Ambient Nature", "4:32"),
            track("Mountain Serenity", "Peaceful Sounds", "5:18"),
            track("Forest Meditation", "Nature's Harmony", "6:45"),
            track("Rainfall Dreams", "Calm Waters", "4:12"),
        ],
    },
    Category {
        name: "Jazz Lounge",
        icon: "🎷",
        items: &[
            track("Midnight in Paris", "Hotel Jazz Ensemble", "3:54"),
            track("Smooth Operator", "The Lounge Collective", "4:28"),
            track("Blue Moon Rising", "Jazz Masters", "5:33"),
            track("Cocktail Hour", "Evening Jazz", "4:07"),
        ],
    },
    Category {
        name: "Clásica",
        icon: "🎻",
        items: &[
            track("Canon en Re", "Pachelbel", "6:02"),
            track("Claro de Luna", "Debussy", "5:24"),
            track("Ave María", "Schubert", "4:18"),
            track("Für Elise", "Beethoven", "3:35"),
        ],
    },
    Category {
        name: "Ambiente Hotel",
        icon: "🏨",
        items: &[
            track("Lobby Elegance", "Hotel Ambience", "8:12"),
            track("Pool Side Vibes", "Resort Sounds", "6:30"),
            track("Spa Tranquility", "Wellness Music", "7:45"),
            track("Rooftop Sunset", "Evening Atmosphere", "5:58"),
        ],
    },
];
