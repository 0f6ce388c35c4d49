use clap::Parser;
use iced::keyboard::{self, key};
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod pictures;
mod state;
mod ui;

use config::{Cli, Config};
use pictures::{PictureBoard, PictureCache};
use state::catalog::Catalog;
use state::navigation::{Navigator, Route, Transition};

/// Main application state
struct PetAdoption {
    /// Every pet loaded at start-up
    catalog: Catalog,
    /// Why the catalog is empty, if loading failed
    load_error: Option<String>,
    /// Current screen and selected pet
    navigator: Navigator,
    /// Picture loading state per URL
    pictures: PictureBoard,
    /// None when pictures are off or the HTTP client could not be built
    picture_cache: Option<PictureCache>,
    config: Config,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User pressed "View Details" on the card at this catalog index
    ViewDetails(usize),
    /// User pressed "Back" or Escape
    Back,
    /// User pressed "Confirm Adoption"
    ConfirmAdoption,
    /// Background picture fetch finished
    PictureLoaded(String, Result<PathBuf, String>),
}

impl PetAdoption {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path),
            None => Catalog::bundled(),
        };
        Self::with_catalog(catalog.map_err(|e| e.to_string()), config)
    }

    /// Build the app around an already loaded catalog and start picture fetches
    fn with_catalog(catalog: Result<Catalog, String>, config: Config) -> (Self, Task<Message>) {
        // A broken catalog still shows the list screen, empty, with the error
        let (catalog, load_error) = match catalog {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::error!("❌ {}", e);
                (Catalog::default(), Some(e))
            }
        };

        let picture_cache = if config.fetch_pictures {
            let dir = config
                .picture_cache_dir
                .clone()
                .unwrap_or_else(PictureCache::default_dir);
            let base_dir = config
                .catalog_path
                .as_deref()
                .and_then(|path| path.parent())
                .map(|parent| parent.to_path_buf());

            match PictureCache::new(dir, config.picture_timeout()) {
                Ok(cache) => Some(cache.with_base_dir(base_dir)),
                Err(e) => {
                    tracing::error!("❌ Pictures disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let mut app = PetAdoption {
            catalog,
            load_error,
            navigator: Navigator::new(),
            pictures: PictureBoard::new(),
            picture_cache,
            config,
        };

        tracing::info!("🐾 Pet Adoption initialized with {} pets", app.catalog.len());

        let task = app.fetch_pictures();
        (app, task)
    }

    /// Start one fetch per distinct picture URL in the catalog
    fn fetch_pictures(&mut self) -> Task<Message> {
        let Some(picture_cache) = &self.picture_cache else {
            return Task::none();
        };

        let tasks: Vec<Task<Message>> = self
            .catalog
            .picture_urls()
            .into_iter()
            .filter(|url| self.pictures.request(url))
            .map(|url| {
                let cache = picture_cache.clone();
                Task::perform(cache.fetch(url.clone()), move |result| {
                    Message::PictureLoaded(url.clone(), result.map_err(|e| e.to_string()))
                })
            })
            .collect();

        tracing::debug!(
            "⏳ Fetching {} pictures into {}",
            tasks.len(),
            picture_cache.dir().display()
        );
        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ViewDetails(index) => {
                let Some(pet) = self.catalog.get(index).cloned() else {
                    tracing::warn!("⚠️  No pet at index {}", index);
                    return Task::none();
                };

                tracing::debug!("PetInfo {}", pet);
                if self.navigator.select(pet) == Transition::Reused {
                    tracing::debug!("Detail already showing, selection replaced");
                }
                Task::none()
            }
            Message::Back => {
                self.navigator.back();
                Task::none()
            }
            Message::ConfirmAdoption => {
                self.navigator.confirm_adoption();
                Task::none()
            }
            Message::PictureLoaded(url, result) => {
                self.pictures.resolve(&url, result);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.navigator.current() {
            Route::List => ui::list::view(
                &self.catalog,
                &self.pictures,
                self.config.columns,
                self.load_error.as_deref(),
            ),
            Route::Detail => ui::detail::view(self.navigator.selection(), &self.pictures),
        }
    }

    /// Escape acts as the platform back button
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Back),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli);
    tracing::debug!("Using config {:?}", config);

    iced::application("Pet Adoption", PetAdoption::update, PetAdoption::view)
        .subscription(PetAdoption::subscription)
        .theme(PetAdoption::theme)
        .window_size((480.0, 800.0))
        .centered()
        .run_with(move || PetAdoption::new(config))
}
