//! Request orchestration: cache, fast path, and the async slow path.
//!
//! Every request is admitted with a sequence token. The slow path runs as a
//! spawned task whose result is only delivered if its token is still
//! current; superseded results are silently discarded. Enrichment and
//! ranking are the two bounded suspension points; both degrade gracefully
//! on timeout or failure.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use atelier_core::config::AtelierConfig;
use atelier_core::errors::{AtelierResult, EnrichmentError, JobError};
use atelier_core::models::candidate::RankedCandidate;
use atelier_core::models::context::RequestContext;
use atelier_core::models::job::{Job, JobStatus, RecommendationResponse};
use atelier_core::models::snapshot::Snapshot;
use atelier_core::traits::PreferenceStore;
use atelier_recommend::{PreferenceRanker, RecommendationEngine};

use crate::cache::ResultCache;
use crate::enrichment::protocol::{MatcherInput, MatchingConfig};
use crate::enrichment::{EnrichmentClient, HttpEnrichmentClient};
use crate::jobs::JobTable;
use crate::sequence::SequenceGuard;

/// Entry point for recommendation requests.
pub struct Orchestrator {
    config: AtelierConfig,
    engine: Arc<RecommendationEngine>,
    ranker: Arc<PreferenceRanker>,
    store: Arc<dyn PreferenceStore>,
    enrichment: Option<Arc<dyn EnrichmentClient>>,
    cache: Arc<ResultCache>,
    jobs: Arc<JobTable>,
    sequence: Arc<SequenceGuard>,
}

impl Orchestrator {
    /// Build an orchestrator, wiring the HTTP enrichment client when an
    /// endpoint and credential are configured.
    pub fn new(config: AtelierConfig, store: Arc<dyn PreferenceStore>) -> AtelierResult<Self> {
        let enrichment: Option<Arc<dyn EnrichmentClient>> =
            if config.orchestrator.enrichment_configured() {
                let client = HttpEnrichmentClient::from_config(&config.orchestrator)?;
                Some(Arc::new(client))
            } else {
                None
            };
        Ok(Self::with_enrichment(config, store, enrichment))
    }

    /// Build an orchestrator with an explicit enrichment client (or none).
    pub fn with_enrichment(
        config: AtelierConfig,
        store: Arc<dyn PreferenceStore>,
        enrichment: Option<Arc<dyn EnrichmentClient>>,
    ) -> Self {
        let engine = Arc::new(RecommendationEngine::new(config.recommend.clone()));
        let ranker = Arc::new(PreferenceRanker::new(config.ranking.clone()));
        let cache = Arc::new(ResultCache::new(config.orchestrator.cache_capacity));
        Self {
            config,
            engine,
            ranker,
            store,
            enrichment,
            cache,
            jobs: Arc::new(JobTable::new()),
            sequence: Arc::new(SequenceGuard::new()),
        }
    }

    /// Handle one recommendation request.
    ///
    /// Answers from the cache when the snapshot pair was already processed.
    /// Without an enrichment client or a free-text user intent the request
    /// is answered synchronously from static analysis; otherwise a
    /// background job is started and returned in the processing state.
    ///
    /// Must be called from within a tokio runtime: the slow path spawns
    /// its pipeline onto the current runtime.
    pub fn request_recommendations(
        &self,
        current: Snapshot,
        previous: Option<Snapshot>,
        context: RequestContext,
    ) -> AtelierResult<RecommendationResponse> {
        let token = self.sequence.next();
        let cache_key = ResultCache::key(
            &current.content_fingerprint,
            previous.as_ref().map(|s| s.content_fingerprint.as_str()),
        );

        if let Some(cached) = self.cache.get(&cache_key) {
            info!(snapshot = %current.id, "serving cached recommendations");
            return Ok(completed_response(cached.as_ref().clone()));
        }

        // Slow path only when a client is wired and the caller supplied
        // free-text intent; everything else answers synchronously.
        let client = match (&self.enrichment, &context.user_intent) {
            (Some(client), Some(_)) => Arc::clone(client),
            _ => {
                let candidates = self
                    .engine
                    .generate(&current, previous.as_ref(), &context)?;
                let ranked = self.ranker.rank(candidates, self.store.as_ref());
                self.cache.insert(cache_key, ranked.clone());
                debug!(snapshot = %current.id, "fast path served synchronously");
                return Ok(completed_response(ranked));
            }
        };

        let job_id = Uuid::new_v4().to_string();
        self.jobs.insert_processing(&job_id);
        info!(job_id = %job_id, snapshot = %current.id, "enrichment job started");

        let task = PipelineTask {
            job_id: job_id.clone(),
            token,
            cache_key,
            current,
            previous,
            context,
            engine: Arc::clone(&self.engine),
            ranker: Arc::clone(&self.ranker),
            store: Arc::clone(&self.store),
            client,
            cache: Arc::clone(&self.cache),
            jobs: Arc::clone(&self.jobs),
            sequence: Arc::clone(&self.sequence),
            enrichment_timeout: Duration::from_secs(self.config.orchestrator.enrichment_timeout_secs),
            ranking_timeout: Duration::from_millis(self.config.orchestrator.ranking_timeout_ms),
            max_candidates: self.config.recommend.max_candidates,
        };
        tokio::spawn(task.run());

        Ok(RecommendationResponse {
            job_id,
            status: JobStatus::Processing,
            recommendations: None,
        })
    }

    /// Poll a background job. Terminal jobs are removed by the poll that
    /// observes them; unknown or already-delivered ids return `None`.
    pub fn get_job_status(&self, job_id: &str) -> Option<Job> {
        self.jobs.poll(job_id)
    }
}

fn completed_response(ranked: Vec<RankedCandidate>) -> RecommendationResponse {
    RecommendationResponse {
        job_id: Uuid::new_v4().to_string(),
        status: JobStatus::Completed,
        recommendations: Some(ranked),
    }
}

/// One slow-path pipeline execution, owned by its spawned task.
struct PipelineTask {
    job_id: String,
    token: u64,
    cache_key: String,
    current: Snapshot,
    previous: Option<Snapshot>,
    context: RequestContext,
    engine: Arc<RecommendationEngine>,
    ranker: Arc<PreferenceRanker>,
    store: Arc<dyn PreferenceStore>,
    client: Arc<dyn EnrichmentClient>,
    cache: Arc<ResultCache>,
    jobs: Arc<JobTable>,
    sequence: Arc<SequenceGuard>,
    enrichment_timeout: Duration,
    ranking_timeout: Duration,
    max_candidates: usize,
}

impl PipelineTask {
    async fn run(self) {
        let outcome = self.execute().await;

        // Staleness gate: no observable effect from a superseded request.
        if !self.sequence.is_current(self.token) {
            debug!(job_id = %self.job_id, "superseded result dropped");
            self.jobs.discard(&self.job_id);
            return;
        }

        match outcome {
            Ok(ranked) => {
                self.cache.insert(self.cache_key.clone(), ranked.clone());
                self.jobs.complete(&self.job_id, ranked);
                info!(job_id = %self.job_id, "enrichment job completed");
            }
            Err(err) => {
                warn!(job_id = %self.job_id, error = %err, "enrichment job failed");
                self.jobs.fail(&self.job_id, err.to_string());
            }
        }
    }

    async fn execute(&self) -> Result<Vec<RankedCandidate>, JobError> {
        let synthetic = self
            .engine
            .generate(&self.current, self.previous.as_ref(), &self.context)
            .map_err(|e| JobError::PipelineFailed {
                reason: e.to_string(),
            })?;

        let inferred_intent = self
            .previous
            .as_ref()
            .and_then(|prev| atelier_diff::diff(prev, &self.current).ok())
            .and_then(|d| atelier_diff::classify_intent(&d));

        let input = MatcherInput {
            user_intent: self.context.user_intent.clone(),
            inferred_intent,
            current: self.current.clone(),
            previous: self.previous.clone(),
            platform: self.context.platform.clone(),
            matching: MatchingConfig {
                max_candidates: self.max_candidates,
            },
            examples: Vec::new(),
        };

        let enriched = match timeout(self.enrichment_timeout, self.client.enrich(&input)).await {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(err)) => {
                warn!(job_id = %self.job_id, error = %err, "enrichment failed, serving synthetic-only");
                Vec::new()
            }
            Err(_) => {
                let err = EnrichmentError::Timeout {
                    timeout_secs: self.enrichment_timeout.as_secs(),
                };
                warn!(job_id = %self.job_id, error = %err, "enrichment timed out, serving synthetic-only");
                Vec::new()
            }
        };

        let mut candidates = synthetic;
        candidates.extend(enriched);

        let unranked = candidates.clone();
        let ranker = Arc::clone(&self.ranker);
        let store = Arc::clone(&self.store);
        let mut ranked = match timeout(
            self.ranking_timeout,
            tokio::task::spawn_blocking(move || ranker.rank(candidates, store.as_ref())),
        )
        .await
        {
            Ok(Ok(ranked)) => ranked,
            Ok(Err(join_err)) => {
                warn!(job_id = %self.job_id, error = %join_err, "ranking task failed, serving unranked order");
                PreferenceRanker::rank_passthrough(unranked)
            }
            Err(_) => {
                warn!(job_id = %self.job_id, "ranking timed out, serving unranked order");
                PreferenceRanker::rank_passthrough(unranked)
            }
        };
        ranked.truncate(self.max_candidates);
        Ok(ranked)
    }
}
