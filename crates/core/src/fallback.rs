//! The deterministic fallback catalog.
//!
//! When the backing store cannot be queried (server side) or the catalog
//! fetch fails (client side), this fixed dataset is substituted so the demo
//! always has something renderable. It spans every known franchise tag and is
//! returned verbatim, unfiltered.

use crate::movie::Movie;

fn entry(
    id: i64,
    title: &str,
    franchise: &str,
    category: &str,
    rating: f64,
    year: i64,
    synopsis: &str,
    poster: &str,
    backdrop: &str,
    is_trending: Option<bool>,
    is_new: Option<bool>,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        franchise: franchise.to_string(),
        category: category.to_string(),
        rating,
        year,
        synopsis: synopsis.to_string(),
        poster_url: format!("https://image.tmdb.org/t/p/w500/{poster}"),
        backdrop_url: format!("https://image.tmdb.org/t/p/original/{backdrop}"),
        is_trending,
        is_new,
    }
}

/// The fixed demonstration catalog.
pub fn fallback_catalog() -> Vec<Movie> {
    vec![
        entry(
            1,
            "Avatar: The Way of Water",
            "disney",
            "Sci-Fi",
            4.8,
            2022,
            "Jake Sully lives with his newfound family formed on the extrasolar moon Pandora. \
             Once a familiar threat returns to finish what was previously started, Jake must \
             work with Neytiri and the army of the Na'vi race to protect their home.",
            "t6HIqrRAclMCA60NsSmeqe9RmNV.jpg",
            "s16H6tpK2utvwDtzZ8Qy4qm5Emw.jpg",
            Some(true),
            None,
        ),
        entry(
            2,
            "Guardians of the Galaxy Vol. 3",
            "marvel",
            "Action",
            4.7,
            2023,
            "Peter Quill, still reeling from the loss of Gamora, must rally his team around \
             him to defend the universe along with protecting one of their own.",
            "r2J02Z2OpNTctfOSN1Ydgii51I3.jpg",
            "5YZbUmjbMa3ClvSW1Wj3D6XGolb.jpg",
            Some(true),
            None,
        ),
        entry(
            3,
            "The Mandalorian",
            "starwars",
            "Adventure",
            4.9,
            2019,
            "After the fall of the Galactic Empire, lawlessness has spread throughout the \
             galaxy. A lone gunfighter makes his way through the outer reaches, earning his \
             keep as a bounty hunter.",
            "eU1i6eHXlzMOlEq0ku1R07JHLZs.jpg",
            "6Lw54zxia6h7Gq36RNF3hXPScDB.jpg",
            None,
            Some(true),
        ),
        entry(
            4,
            "Toy Story 4",
            "pixar",
            "Animation",
            4.5,
            2019,
            "Woody has always been confident about his place in the world and that his \
             priority is taking care of his kid, whether that's Andy or Bonnie.",
            "w9kR8qbmQ01HwnvK4alvnQ2ca0L.jpg",
            "m67smI1IIMmYzCl9axvKNULVKLr.jpg",
            Some(false),
            None,
        ),
        entry(
            5,
            "Inside Out 2",
            "pixar",
            "Animation",
            4.9,
            2024,
            "Joy, Sadness, Anger, Fear and Disgust have been running a successful operation \
             by all accounts. However, when Anxiety shows up, they aren't sure how to feel.",
            "vpnVM9B6NMmQpWeZvzLvDESb2QY.jpg",
            "xg27NrXi7VXCGUr7MG75UqLl6Vg.jpg",
            None,
            Some(true),
        ),
        entry(
            6,
            "Loki",
            "marvel",
            "Fantasy",
            4.6,
            2021,
            "The mercurial villain Loki resumes his role as the God of Mischief in a new \
             series that takes place after the events of 'Avengers: Endgame'.",
            "voHUmluYmKyleFkTu3lOXQG702u.jpg",
            "cm683db98rQpD8w42j74JzP5U7p.jpg",
            None,
            None,
        ),
        entry(
            7,
            "Limitless with Chris Hemsworth",
            "natgeo",
            "Documentary",
            4.7,
            2022,
            "A different way to live better for longer. Chris Hemsworth takes on an epic \
             mission to discover the full potential of the human body.",
            "ms2K926e82B9yYF0FhOXy8v0U84.jpg",
            "f2t4JbUvQKwD5NuY9S45R7UaJb.jpg",
            None,
            None,
        ),
        entry(
            8,
            "Star Wars: Andor",
            "starwars",
            "Sci-Fi",
            4.8,
            2022,
            "The prequel to Rogue One. In an era filled with danger, deception and intrigue, \
             Cassian will embark on the path that is destined to turn him into a rebel hero.",
            "59SVNwSmV7C2jqGX90Yl1x05QO.jpg",
            "ajztm40qDPqMONnPJQjek5C16I0.jpg",
            None,
            None,
        ),
    ]
}
