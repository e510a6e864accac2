use mongodb::error::Error as MongoError;
use thiserror::Error;
use uuid::Uuid;

/// Result alias for MongoDB DAO operations.
pub type MongoResult<T> = Result<T, MongoDaoError>;

/// Failures surfaced by the MongoDB backend, each tagged with the operation
/// that produced it.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection URI could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// The offending URI.
        uri: String,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The client could not be constructed from parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The initial connection ping never succeeded.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A periodic health ping failed.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// Index creation failed.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Collection the index belongs to.
        collection: &'static str,
        /// Index name.
        index: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// An insert into a collection failed.
    #[error("failed to insert document `{id}` into `{collection}`")]
    Insert {
        /// Target collection.
        collection: &'static str,
        /// Document id.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A lookup by id failed.
    #[error("failed to load document `{id}` from `{collection}`")]
    Load {
        /// Target collection.
        collection: &'static str,
        /// Document id.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A list query failed.
    #[error("failed to list documents in `{collection}`")]
    List {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A count query failed.
    #[error("failed to count documents in `{collection}`")]
    Count {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The atomic roster reservation update failed in transit.
    #[error("failed to reserve a roster slot for bucket `{age_group}`")]
    ReserveSlot {
        /// Serialized bucket the reservation targeted.
        age_group: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
}
