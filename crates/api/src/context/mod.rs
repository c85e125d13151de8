//! Application context - dependency injection container

use std::sync::Arc;

use meetnotify_core::{
    Clock, MeetingRepository, MeetingService, ParticipantRepository, ParticipantService,
    ReviewService, SettingsRepository, SettingsService, SystemClock, TemporalClassifier,
    UserRepository, UserService,
};
use meetnotify_domain::{ApiConfig, BackendKind, Config, MeetNotifyError, Result};
use meetnotify_infra::api::{
    ApiClient, ApiMeetingRepository, ApiParticipantRepository, ApiSettingsRepository,
    ApiUserRepository,
};
use meetnotify_infra::memory::{
    InMemoryStore, MemoryMeetingRepository, MemoryParticipantRepository,
    MemorySettingsRepository, MemoryUserRepository,
};
use tracing::info;

/// Repository set backing the services
struct Repositories {
    meetings: Arc<dyn MeetingRepository>,
    participants: Arc<dyn ParticipantRepository>,
    users: Arc<dyn UserRepository>,
    settings: Arc<dyn SettingsRepository>,
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub classifier: TemporalClassifier,
    pub meetings: Arc<MeetingService>,
    pub participants: Arc<ParticipantService>,
    pub users: Arc<UserService>,
    pub settings: Arc<SettingsService>,
    pub review: Arc<ReviewService>,
}

impl AppContext {
    /// Build the context on the system clock in the configured timezone.
    ///
    /// # Errors
    /// `Config` for an unknown timezone or an unusable API configuration.
    pub fn new(config: Config) -> Result<Self> {
        let tz = config.schedule.tz()?;
        Self::with_clock(config, Arc::new(SystemClock::new(tz)))
    }

    /// Build the context on an explicit clock.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let repositories = match config.backend {
            BackendKind::Api => api_repositories(&config.api)?,
            BackendKind::Memory => {
                memory_repositories(Arc::new(InMemoryStore::seeded(clock.now().date())))
            }
        };
        Self::assemble(config, clock, repositories)
    }

    /// Context over an existing in-memory store, whatever backend `config`
    /// names.
    pub fn with_store(
        config: Config,
        store: Arc<InMemoryStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let config = Config { backend: BackendKind::Memory, ..config };
        Self::assemble(config, clock, memory_repositories(store))
    }

    fn assemble(
        config: Config,
        clock: Arc<dyn Clock>,
        repositories: Repositories,
    ) -> Result<Self> {
        let tz = config.schedule.tz()?;
        let classifier = TemporalClassifier::new(tz, config.schedule.boundary);

        let meetings = Arc::new(
            MeetingService::new(
                Arc::clone(&repositories.meetings),
                classifier,
                Arc::clone(&clock),
            )
            .with_page_size(config.schedule.page_size),
        );
        let participants =
            Arc::new(ParticipantService::new(Arc::clone(&repositories.participants)));
        let users = Arc::new(UserService::new(repositories.users));
        let settings = Arc::new(SettingsService::new(
            repositories.settings,
            classifier,
            Arc::clone(&clock),
        ));
        let review = Arc::new(ReviewService::new(
            repositories.meetings,
            repositories.participants,
            classifier,
            Arc::clone(&clock),
        ));

        info!(
            backend = %config.backend,
            timezone = %tz,
            boundary = ?config.schedule.boundary,
            "application context initialised"
        );

        Ok(Self { config, clock, classifier, meetings, participants, users, settings, review })
    }
}

fn api_repositories(config: &ApiConfig) -> Result<Repositories> {
    let client = Arc::new(ApiClient::from_config(config).map_err(MeetNotifyError::from)?);
    info!(base_url = %client.base_url(), "using REST backend");
    Ok(Repositories {
        meetings: Arc::new(ApiMeetingRepository::new(Arc::clone(&client))),
        participants: Arc::new(ApiParticipantRepository::new(Arc::clone(&client))),
        users: Arc::new(ApiUserRepository::new(Arc::clone(&client))),
        settings: Arc::new(ApiSettingsRepository::new(client)),
    })
}

fn memory_repositories(store: Arc<InMemoryStore>) -> Repositories {
    Repositories {
        meetings: Arc::new(MemoryMeetingRepository::new(Arc::clone(&store))),
        participants: Arc::new(MemoryParticipantRepository::new(Arc::clone(&store))),
        users: Arc::new(MemoryUserRepository::new(Arc::clone(&store))),
        settings: Arc::new(MemorySettingsRepository::new(store)),
    }
}
