use anyhow::{Context, Result};
use dexnote_engine::{
    EvolutionNode, NormalizedRecord, TypeChart, assemble, title_case, walk_lineage,
};
use dexnote_protocol::{
    EvolutionChainRecord, NamedResource, PokemonRecord, ResourceList, SpeciesRecord, TypeRecord,
    parse_record,
};
use futures_util::{StreamExt, TryStreamExt, stream};
use serde::de::DeserializeOwned;

use crate::config::ImportConfig;
use crate::source::DataSource;
use crate::writer::RecordSink;

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Species considered after `limit`
    pub species: usize,
    /// Notes written
    pub written: usize,
    /// Species skipped because their note already existed
    pub skipped: usize,
    /// Species that failed to fetch, parse or write
    pub failed: usize,
}

/// Batch importer: one type chart per run, then every species in turn
pub struct Importer<S> {
    source: S,
    config: ImportConfig,
}

impl<S: DataSource> Importer<S> {
    pub fn new(source: S, config: ImportConfig) -> Self {
        Self { source, config }
    }

    fn concurrency(&self) -> usize {
        self.config.concurrency.max(1)
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: &str, url: &str) -> Result<T> {
        let body = self
            .source
            .get(url)
            .await
            .with_context(|| format!("Failed to fetch {} from {}", kind, url))?;

        parse_record(kind, &body).with_context(|| format!("Failed to parse {} from {}", kind, url))
    }

    /// Fetch every type and build the chart
    ///
    /// Fails when the API lists no types at all.
    pub async fn build_type_chart(&self) -> Result<TypeChart> {
        let listing: ResourceList = self
            .fetch("type listing", &self.config.endpoint("type?limit=1000"))
            .await?;

        let records: Vec<TypeRecord> = stream::iter(&listing.results)
            .map(|t| self.fetch("type", &t.url))
            .buffered(self.concurrency())
            .try_collect()
            .await?;

        let chart = TypeChart::from_records(&records)?;
        tracing::info!(types = chart.len(), "type chart ready");
        Ok(chart)
    }

    /// Records for every variety of one species
    pub async fn import_species(
        &self,
        species_ref: &NamedResource,
        chart: &TypeChart,
    ) -> Result<Vec<NormalizedRecord>> {
        let species: SpeciesRecord = self.fetch("species", &species_ref.url).await?;

        let lineage = match species.evolution_chain_url() {
            Some(url) => {
                let chain: EvolutionChainRecord = self.fetch("evolution chain", url).await?;
                let root = EvolutionNode::from_protocol(&chain.chain);
                walk_lineage(&root, self.config.max_evolution_depth).names
            }
            None => Vec::new(),
        };

        if species.varieties.is_empty() {
            tracing::warn!(species = %species.name, "species lists no varieties");
        }

        let mut records = Vec::with_capacity(species.varieties.len());
        for variety in &species.varieties {
            let variant: PokemonRecord = self.fetch("pokemon", &variety.pokemon.url).await?;
            records.push(assemble(&variant, &species, &lineage, chart));
        }

        Ok(records)
    }

    /// Import every listed species into `sink`
    ///
    /// Only a failure to build the type chart or list the species aborts the
    /// run. Anything that goes wrong for one species is logged and counted.
    pub async fn run<W: RecordSink>(&self, sink: &mut W) -> Result<ImportSummary> {
        let chart = self.build_type_chart().await?;

        let listing: ResourceList = self
            .fetch(
                "species listing",
                &self.config.endpoint("pokemon-species?limit=20000"),
            )
            .await?;

        let mut summary = ImportSummary::default();
        let mut pending = Vec::new();
        for species in listing.results.iter().take(self.config.limit.unwrap_or(usize::MAX)) {
            summary.species += 1;
            if self.config.skip_existing && already_written(sink, species) {
                tracing::debug!(species = %species.name, "note exists, skipping");
                summary.skipped += 1;
                continue;
            }
            pending.push(species);
        }

        tracing::info!(
            species = pending.len(),
            skipped = summary.skipped,
            "importing species"
        );

        let chart = &chart;
        let mut results = stream::iter(pending)
            .map(|species| async move { (species, self.import_species(species, chart).await) })
            .buffered(self.concurrency());

        while let Some((species, result)) = results.next().await {
            let outcome = result.and_then(|records| {
                records.iter().try_for_each(|record| {
                    sink.write(record)?;
                    summary.written += 1;
                    Ok(())
                })
            });

            if let Err(e) = outcome {
                summary.failed += 1;
                let error = format!("{:#}", e);
                tracing::error!(species = %species.name, error = %error, "species import failed");
            }
        }

        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            failed = summary.failed,
            "import finished"
        );
        Ok(summary)
    }
}

/// Default notes are titled by species name alone
fn already_written<W: RecordSink>(sink: &W, species: &NamedResource) -> bool {
    species
        .id()
        .is_some_and(|id| sink.contains(id, &title_case(&species.name)))
}
