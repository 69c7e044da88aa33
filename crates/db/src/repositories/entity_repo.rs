//! Generic CRUD repository over a MongoDB collection.

use std::marker::PhantomData;

use fauna_core::query::ListQuery;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::animal::Animal;
use crate::models::category::Category;
use crate::models::species::Species;

/// A stored entity: ties a model type to its collection.
pub trait Entity: Serialize + DeserializeOwned + Unpin + Send + Sync {
    const COLLECTION: &'static str;
}

impl Entity for Category {
    const COLLECTION: &'static str = "categories";
}

impl Entity for Species {
    const COLLECTION: &'static str = "species";
}

impl Entity for Animal {
    const COLLECTION: &'static str = "animals";
}

/// Outcome of an update: how many documents the filter matched and how
/// many were actually modified. Serialized as-is into update responses.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Provides the CRUD operations shared by every entity collection.
pub struct EntityRepo<E>(PhantomData<E>);

/// CRUD operations for the `categories` collection.
pub type CategoryRepo = EntityRepo<Category>;
/// CRUD operations for the `species` collection.
pub type SpeciesRepo = EntityRepo<Species>;
/// CRUD operations for the `animals` collection.
pub type AnimalRepo = EntityRepo<Animal>;

impl<E: Entity> EntityRepo<E> {
    fn collection(db: &Database) -> Collection<E> {
        db.collection(E::COLLECTION)
    }

    /// List documents without any filter.
    ///
    /// Sort and the skip/limit window are applied only when the query
    /// carries them; an empty collection yields an empty vec.
    pub async fn list(db: &Database, query: &ListQuery) -> Result<Vec<E>, mongodb::error::Error> {
        // The find builder borrows the collection, so it needs a binding
        // that outlives the option chain below.
        let collection = Self::collection(db);
        let mut find = collection.find(doc! {});
        if let Some(sort) = &query.sort {
            let field = sort.field.as_str();
            find = find.sort(doc! { field: sort.order.as_i32() });
        }
        if let Some(skip) = query.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = query.limit {
            find = find.limit(limit);
        }

        find.await?.try_collect().await
    }

    /// Find a document by its `_id`. The id must already be validated.
    pub async fn find_by_id(db: &Database, id: &str) -> Result<Option<E>, mongodb::error::Error> {
        Self::find_one(db, doc! { "_id": id }).await
    }

    /// Find the first document matching an arbitrary filter.
    pub async fn find_one(
        db: &Database,
        filter: Document,
    ) -> Result<Option<E>, mongodb::error::Error> {
        Self::collection(db).find_one(filter).await
    }

    /// Insert a single document.
    pub async fn insert(db: &Database, entity: &E) -> Result<(), mongodb::error::Error> {
        Self::collection(db).insert_one(entity).await?;
        Ok(())
    }

    /// Apply the caller's raw key/value document to one document via `$set`.
    ///
    /// No field allow-list is applied. Matching nothing is not an error;
    /// the report simply carries `matched_count: 0`.
    pub async fn update_by_id(
        db: &Database,
        id: &str,
        changes: Document,
    ) -> Result<UpdateReport, mongodb::error::Error> {
        let filter = doc! { "_id": id };

        // The server rejects an empty `$set`; degrade to an existence
        // probe so a no-op update still reports its match count.
        if changes.is_empty() {
            let matched = Self::collection(db).count_documents(filter).await?;
            return Ok(UpdateReport {
                matched_count: matched,
                modified_count: 0,
            });
        }

        let result = Self::collection(db)
            .update_one(filter, doc! { "$set": changes })
            .await?;

        Ok(UpdateReport {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete a document by its `_id`, returning how many were removed.
    ///
    /// Deleting an id that matches nothing is not an error.
    pub async fn delete_by_id(db: &Database, id: &str) -> Result<u64, mongodb::error::Error> {
        let result = Self::collection(db).delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
