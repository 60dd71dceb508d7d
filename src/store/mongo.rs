// src/store/mongo.rs
//! MongoDB backend (sync driver). TLS and credentials come from the
//! connection string; timeouts and the app name from `StoreOptions`.

use mongodb::bson::{self, Bson, Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Collection};

use super::backend::{Backend, Connector, UpsertOutcome};
use crate::config::StoreOptions;
use crate::data::{DataSetRecord, PopulationRecord, RecordKey};
use crate::error::{Error, Result};

pub struct MongoConnector {
    options: StoreOptions,
}

impl MongoConnector {
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }
}

impl Connector for MongoConnector {
    type Backend = MongoBackend;

    fn connect(&self) -> Result<MongoBackend> {
        let mut client_opts = ClientOptions::parse(self.options.uri.as_str())
            .run()
            .map_err(classify_parse)?;
        client_opts.app_name = Some(self.options.app_name.clone());
        client_opts.connect_timeout = Some(self.options.connect_timeout);
        client_opts.server_selection_timeout = Some(self.options.server_selection_timeout);

        let client = Client::with_options(client_opts).map_err(classify)?;
        let backend = MongoBackend {
            population: client
                .database(&self.options.db_name)
                .collection(&self.options.population_collection),
            dataset: client
                .database(&self.options.db_name)
                .collection(&self.options.dataset_collection),
            client,
        };
        // the driver connects lazily; force the handshake now
        backend.ping()?;
        Ok(backend)
    }
}

pub struct MongoBackend {
    client: Client,
    population: Collection<Document>,
    dataset: Collection<Document>,
}

impl Backend for MongoBackend {
    fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(classify)?;
        Ok(())
    }

    fn find_population(&self) -> Result<Vec<PopulationRecord>> {
        let cursor = self
            .population
            .find(doc! {})
            .projection(population_projection())
            .sort(doc! { "ID": 1 })
            .run()
            .map_err(classify)?;

        let mut out = Vec::new();
        for d in cursor {
            let d = d.map_err(classify)?;
            match population_from_doc(&d) {
                Some(rec) => out.push(rec),
                None => logd!("Skipping population document without a numeric ID: {d}"),
            }
        }
        Ok(out)
    }

    fn delete_one(&self, id: i64) -> Result<u64> {
        let res = self
            .population
            .delete_one(doc! { "ID": id })
            .run()
            .map_err(classify)?;
        Ok(res.deleted_count)
    }

    fn delete_many(&self, ids: &[i64]) -> Result<u64> {
        let res = self
            .population
            .delete_many(doc! { "ID": { "$in": ids.to_vec() } })
            .run()
            .map_err(classify)?;
        Ok(res.deleted_count)
    }

    fn sample(&self, k: usize) -> Result<Vec<PopulationRecord>> {
        let size = i64::try_from(k).map_err(|_| Error::Validation(format!("sample size {k} too large")))?;
        let pipeline = vec![
            doc! { "$sample": { "size": size } },
            doc! { "$project": population_projection() },
        ];
        let cursor = self.population.aggregate(pipeline).run().map_err(classify)?;

        let mut out = Vec::new();
        for d in cursor {
            if let Some(rec) = population_from_doc(&d.map_err(classify)?) {
                out.push(rec);
            }
        }
        Ok(out)
    }

    fn upsert_dataset(&self, key: &RecordKey, record: &DataSetRecord) -> Result<UpsertOutcome> {
        let res = self
            .dataset
            .update_one(key_filter(key), doc! { "$set": dataset_document(record)? })
            .upsert(true)
            .run()
            .map_err(classify)?;
        Ok(if res.upserted_id.is_some() {
            UpsertOutcome::Inserted
        } else {
            UpsertOutcome::Updated
        })
    }

    fn find_dataset(&self) -> Result<Vec<DataSetRecord>> {
        let cursor = self
            .dataset
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .run()
            .map_err(classify)?;

        let mut out = Vec::new();
        for d in cursor {
            let d = d.map_err(classify)?;
            out.push(bson::from_document(d).map_err(|e| Error::Encode(e.to_string()))?);
        }
        Ok(out)
    }
}

fn population_projection() -> Document {
    doc! { "_id": 0, "ID": 1, "Movie": 1 }
}

pub(crate) fn key_filter(key: &RecordKey) -> Document {
    match key {
        RecordKey::Url(url) => doc! { "URL": url.as_str() },
        RecordKey::NameYear { movie, year } => doc! { "Movie": movie.clone(), "Year": *year },
    }
}

pub(crate) fn dataset_document(record: &DataSetRecord) -> Result<Document> {
    bson::to_document(record).map_err(|e| Error::Encode(e.to_string()))
}

/// IDs were bulk-loaded by other tools, so accept any numeric BSON type.
pub(crate) fn population_from_doc(d: &Document) -> Option<PopulationRecord> {
    let id = match d.get("ID")? {
        Bson::Int32(v) => i64::from(*v),
        Bson::Int64(v) => *v,
        Bson::Double(v) if v.is_finite() && v.fract() == 0.0 => *v as i64,
        Bson::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    let movie = match d.get("Movie") {
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::Null) | None => s!(),
        Some(other) => other.to_string(),
    };
    Some(PopulationRecord { id, movie })
}

fn classify(err: MongoError) -> Error {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
            Error::Unavailable(err.to_string())
        }
        _ => Error::Backend(err.to_string()),
    }
}

/// A connection string the driver cannot read is a configuration problem,
/// unless resolving it (SRV records) needed the network.
fn classify_parse(err: MongoError) -> Error {
    match err.kind.as_ref() {
        ErrorKind::DnsResolve { .. } | ErrorKind::Io(_) => Error::Unavailable(err.to_string()),
        _ => Error::Config(err.to_string()),
    }
}
