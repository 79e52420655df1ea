use crate::pipeline::context::{Movie, TvShow};

pub const TV_ID_PREFIX: &str = "tv-";

/// Builds the TV show dataset from every `stride`-th movie, by position in
/// `movies` (accepted rows, before sorting). Season and episode counts are
/// placeholders derived from that position so repeated runs give identical
/// files.
pub fn derive_tv_shows(movies: &[Movie], stride: usize) -> Vec<TvShow> {
    movies
        .iter()
        .enumerate()
        .filter(|(i, _)| stride > 0 && i % stride == 0)
        .map(|(i, movie)| tv_show_from(movie, i))
        .collect()
}

fn tv_show_from(movie: &Movie, index: usize) -> TvShow {
    let index = index as u64;
    TvShow {
        id: format!("{}{}", TV_ID_PREFIX, movie.id),
        name: movie.title.clone(),
        overview: movie.overview.clone(),
        first_air_date: movie.release_date.clone(),
        poster_path: movie.poster_path.clone(),
        backdrop_path: movie.backdrop_path.clone(),
        genres: movie.genres.clone(),
        vote_average: movie.vote_average,
        vote_count: movie.vote_count,
        original_language: movie.original_language.clone(),
        popularity: movie.popularity,
        number_of_seasons: (index % 10) + 1,
        number_of_episodes: ((index * 17) % 100) + 10,
    }
}
