use super::Category;

#[derive(Debug)]
pub struct Movie {
    pub title: &'static str,
    pub rating: f32,
    pub duration: &'static str,
    pub year: u16,
}

pub static MOVIE_GENRES: [Category<Movie>; 3] = [
    Category {
        name: "Acción",
        icon: "💥",
        items: &[
            Movie {
                title: "Top Gun: Maverick",
                rating: 8.3,
                duration: "2h 10m",
                year: 2022,
            },
            Movie {
                title: "John Wick 4",
                rating: 7.8,
                duration: "2h 49m",
                year: 2023,
            },
            Movie {
                title: "Fast & Furious X",
                rating: 5.8,
                duration: "2h 21m",
                year: 2023,
            },
        ],
    },
    Category {
        name: "Drama",
        icon: "🎭",
        items: &[
            Movie {
                title: "The Whale",
                rating: 7.7,
                duration: "1h 57m",
                year: 2022,
            },
            Movie {
                title: "Everything Everywhere All at Once",
                rating: 7.8,
                duration: "2h 19m",
                year: 2022,
            },
            Movie {
                title: "The Banshees of Inisherin",
                rating: 7.2,
                duration: "1h 54m",
                year: 2022,
            },
        ],
    },
    Category {
        name: "Comedia",
        icon: "😂",
        items: &[
            Movie {
                title: "Glass Onion",
                rating: 7.2,
                duration: "2h 19m",
                year: 2022,
            },
            Movie {
                title: "The Menu",
                rating: 7.2,
                duration: "1h 47m",
                year: 2022,
            },
            Movie {
                title: "Turning Red",
                rating: 7.0,
                duration: "1h 40m",
                year: 2022,
            },
        ],
    },
];
