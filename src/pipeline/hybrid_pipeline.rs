use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::spawn_blocking;
use tracing::info;

use crate::assembler::DatasetAssembler;
use crate::config::GenerationPlan;
use crate::lineage::{LineageReport, LineageValidator};
use crate::sink::{Sink, SinkError};
use crate::source::{discover, IdentitySource};
use crate::summary::DatasetSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordCounts {
    pub banks: usize,
    pub accounts: usize,
    pub transactions: usize
}

/// Keys the sink stored each dataset under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFiles {
    pub banks: String,
    pub accounts: String,
    pub transactions: String
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub seed: u64,
    pub records: RecordCounts,
    pub files: OutputFiles,
    pub lineage: LineageReport,
    pub summary: DatasetSummary
}

/// Real reference data in, synthetic transactions out.
pub struct HybridPipeline<S: IdentitySource, K: Sink> {
    source: Arc<S>,
    sink: Arc<K>,
    plan: GenerationPlan
}

impl<S: IdentitySource, K: Sink> HybridPipeline<S, K> {
    pub fn new(source: Arc<S>, sink: Arc<K>, plan: GenerationPlan) -> Self {
        Self { source, sink, plan }
    }

    /// Runs the pipeline with the current time as the batch timestamp.
    pub async fn run(&self) -> anyhow::Result<RunSummary> {
        self.run_at(Utc::now()).await
    }

    /// Discovers accounts, synthesizes and validates transactions, then hands all
    /// three datasets to the sink. `timestamp` is the single batch timestamp of the run.
    pub async fn run_at(&self, timestamp: DateTime<Utc>) -> anyhow::Result<RunSummary> {
        let source = self.source.clone();
        let discovery = spawn_blocking(move || discover(source.as_ref())).await??;

        let assembler = DatasetAssembler::new(self.plan.clone());
        let references = discovery.references();

        let banks = assembler.banks(discovery.banks, timestamp);
        let accounts = assembler.accounts(discovery.accounts, timestamp);
        let transactions = assembler.transactions(&references, timestamp);

        let lineage = LineageValidator::new(&banks, &accounts).validate(&transactions);
        let summary = DatasetSummary::from_transactions(&transactions);
        summary.log();

        let records = RecordCounts {
            banks: banks.len(),
            accounts: accounts.len(),
            transactions: transactions.len()
        };

        //NOTE: Sink writes are blocking I/O and run on the blocking pool, same as discovery
        let sink = self.sink.clone();
        let files = spawn_blocking(move || -> Result<OutputFiles, SinkError> {
            Ok(OutputFiles {
                banks: sink.write(&banks)?,
                accounts: sink.write(&accounts)?,
                transactions: sink.write(&transactions)?
            })
        }).await??;

        info!("Pipeline completed: [{}] banks, [{}] accounts, [{}] transactions", records.banks, records.accounts, records.transactions);

        Ok(RunSummary {
            timestamp,
            seed: assembler.seed(),
            records,
            files,
            lineage,
            summary
        })
    }
}
