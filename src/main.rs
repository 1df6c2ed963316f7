use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use playlist_manager::catalog::{self, CatalogConfig, DurationUnit, TrackQuery};
use playlist_manager::display;
use playlist_manager::model::{Library, Playlist, Track};
use playlist_manager::ordering::{ByArtistThenDuration, ByDuration, ByRelease, ByTitle};
use playlist_manager::playback::Player;
use playlist_manager::ranking::DEFAULT_RANKING_LIMIT;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage playlists, a playback queue and a song catalog", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through playlists, the player and the ranking with built-in songs
    Demo,

    /// List songs from a catalog file
    Catalog {
        #[command(flatten)]
        source: SourceArgs,

        /// Only songs by this artist
        #[arg(long)]
        artist: Option<String>,

        /// Only songs tagged with this genre
        #[arg(long)]
        genre: Option<String>,

        /// Only songs longer than this many seconds
        #[arg(long)]
        min_duration: Option<u64>,

        /// Only songs whose title starts with this text
        #[arg(long)]
        starts_with: Option<String>,

        /// Sort order (reads the whole catalog)
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Show at most this many songs
        #[arg(long)]
        take: Option<usize>,
    },

    /// Summary statistics of a catalog file
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Catalog file (title;artist;duration;genres[;release])
    #[arg(short = 'f', long, default_value = "songs.csv")]
    file: String,

    /// Durations in the catalog are `m.ss` minutes and seconds instead of seconds
    #[arg(long)]
    minutes: bool,

    /// TOML catalog configuration; overrides --file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortKey {
    Title,
    Duration,
    Artist,
    Release,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Demo => run_demo(),
        Command::Catalog {
            source,
            artist,
            genre,
            min_duration,
            starts_with,
            sort,
            take,
        } => {
            let config = source.config()?;
            let mut tracks: Box<dyn Iterator<Item = Track>> = Box::new(catalog::open(&config)?);

            if let Some(artist) = artist {
                tracks = Box::new(tracks.by_artist(artist));
            }
            if let Some(genre) = genre {
                tracks = Box::new(tracks.with_genre(genre));
            }
            if let Some(secs) = min_duration {
                tracks = Box::new(tracks.longer_than(Duration::from_secs(secs)));
            }
            if let Some(prefix) = starts_with {
                tracks = Box::new(tracks.title_starts_with(prefix));
            }

            let listed: Vec<Track> = match sort {
                Some(key) => {
                    let mut sorted = sort_tracks(tracks, key);
                    sorted.truncate(take.unwrap_or(usize::MAX));
                    sorted
                }
                // without sorting, stop reading as soon as enough songs are found
                None => tracks.take(take.unwrap_or(usize::MAX)).collect(),
            };

            println!("Songs from {:?}:", config.expanded_path());
            for track in &listed {
                println!("{}", display::catalog_line(track));
            }
            log::info!("{} songs listed", listed.len());
            Ok(())
        }
        Command::Stats { source } => run_stats(&source.config()?),
    }
}

impl SourceArgs {
    fn config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::load(path)?,
            None => CatalogConfig::new(&self.file),
        };
        if self.minutes {
            config = config.with_duration_unit(DurationUnit::Minutes);
        }
        Ok(config)
    }
}

fn sort_tracks(tracks: impl Iterator<Item = Track>, key: SortKey) -> Vec<Track> {
    match key {
        SortKey::Title => tracks.sorted_by(ByTitle),
        SortKey::Duration => tracks.sorted_by(ByDuration),
        SortKey::Artist => tracks.sorted_by(ByArtistThenDuration),
        SortKey::Release => tracks.sorted_by(ByRelease),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn run_stats(config: &CatalogConfig) -> Result<()> {
    let tracks: Vec<Track> = catalog::open(config)?.collect();
    log::debug!("Loaded {} songs for statistics", tracks.len());

    let total = tracks.iter().total_duration();
    let average = tracks.iter().average_duration();
    let artists = tracks.iter().distinct_artists();
    let genres = tracks.iter().distinct_genres();
    let top_artist = tracks.iter().top_artist();
    let longest = tracks.iter().longest(DEFAULT_RANKING_LIMIT);

    println!("Catalog {:?}", config.expanded_path());
    println!("Total duration: {} seconds", total.as_secs());
    match average {
        Some(avg) => println!("Average duration: {:.1} seconds", avg.as_secs_f64()),
        None => println!("Average duration: no songs"),
    }
    println!("Artists ({}): {}", artists.len(), artists.join(", "));
    println!("Genres ({}): {}", genres.len(), genres.join(", "));
    if let Some((artist, count)) = top_artist {
        println!("Artist with most songs: {} ({})", artist, count);
    }
    println!("Longest songs:");
    for track in &longest {
        println!("{}", display::catalog_line(track));
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    log::info!("Playlist Manager demo");
    log::info!("=====================");

    let mut rock_nacional = Playlist::new("Rock Nacional");
    rock_nacional.add_many([
        Track::from_secs("Tempo Perdido", "Legião Urbana", 295),
        Track::from_secs("Pro Dia Nascer Feliz", "Barão Vermelho", 225),
        Track::from_secs("Eduardo e Mônica", "Legião Urbana", 330),
        Track::from_secs("Geração Coca-Cola", "Legião Urbana", 230),
        Track::from_secs("Geração Coca-Cola", "Legião Urbana", 230),
    ]);

    let mut legiao = Playlist::new("Legião Urbana");
    legiao.add_many([
        Track::from_secs("Eduardo e Mônica", "Legião Urbana", 330),
        Track::from_secs("Faroeste Caboclo", "Legião Urbana", 570),
        Track::from_secs("Que País É Este", "Legião Urbana", 230),
        Track::from_secs("Há Tempos", "Legião Urbana", 260),
    ]);

    let mut library = Library::new();
    library.add_playlist(rock_nacional);
    library.add_playlist(legiao);

    for playlist in library.playlists() {
        print_lines(display::playlist_lines(playlist));
        print_lines(display::playlist_lines(&playlist.sorted_by(ByDuration)));
        print_lines(display::playlist_lines(&playlist.shuffled()));
    }

    let mut player = Player::new();
    player.enqueue(Track::from_secs("Bohemian Rhapsody", "Queen", 355));
    if let Some(playlist) = library.get_playlist("Rock Nacional") {
        player.enqueue_playlist(playlist);
    }
    print_lines(display::queue_lines(&player));

    player.play()?;
    player.play()?;
    player.back()?;
    player.play()?;
    player.advance()?;
    print_lines(display::queue_lines(&player));
    print_lines(display::history_lines(&player));

    while player.queue_len() > 0 {
        player.play()?;
    }
    if let Err(e) = player.play() {
        log::warn!("Nothing left to play: {}", e);
    }

    print_lines(display::ranking_lines(
        &library.top_played(DEFAULT_RANKING_LIMIT),
    ));
    Ok(())
}
