//! Joined listing for the `animals` collection.
//!
//! The animal listing is the one read that does not return stored
//! documents verbatim: each row is denormalized through a two-hop left
//! join (animal -> species -> category) before sorting and pagination.

use fauna_core::query::ListQuery;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::models::animal::Animal;
use crate::models::category::Category;
use crate::models::species::Species;
use crate::repositories::entity_repo::{Entity, EntityRepo};

/// Build the aggregation pipeline for the denormalized animal listing.
///
/// Stage order matters: both joins run before `$sort`/`$skip`/`$limit`
/// so sorting and pagination operate on fully joined rows, and each
/// `$unwind` preserves rows whose join matched nothing.
pub fn joined_list_pipeline(query: &ListQuery) -> Vec<Document> {
    let mut pipeline = vec![
        doc! { "$lookup": {
            "from": Species::COLLECTION,
            "localField": "species",
            "foreignField": "_id",
            "as": "species",
        }},
        doc! { "$unwind": {
            "path": "$species",
            "preserveNullAndEmptyArrays": true,
        }},
        doc! { "$lookup": {
            "from": Category::COLLECTION,
            "localField": "species.category",
            "foreignField": "_id",
            "as": "species.category",
        }},
        doc! { "$unwind": {
            "path": "$species.category",
            "preserveNullAndEmptyArrays": true,
        }},
    ];

    if let Some(sort) = &query.sort {
        let field = sort.field.as_str();
        pipeline.push(doc! { "$sort": { field: sort.order.as_i32() } });
    }

    if let (Some(skip), Some(limit)) = (query.skip, query.limit) {
        pipeline.push(doc! { "$skip": skip as i64 });
        pipeline.push(doc! { "$limit": limit });
    }

    pipeline
}

impl EntityRepo<Animal> {
    /// Run the joined listing pipeline.
    ///
    /// The nested `species` / `species.category` shapes are loosely
    /// typed, so rows decode as raw [`Document`]s rather than [`Animal`]s.
    pub async fn list_joined(
        db: &Database,
        query: &ListQuery,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        db.collection::<Animal>(Animal::COLLECTION)
            .aggregate(joined_list_pipeline(query))
            .await?
            .try_collect()
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use fauna_core::query::{SortOrder, SortSpec};
    use mongodb::bson::Bson;

    fn stage_name(stage: &Document) -> &str {
        stage.keys().next().map(String::as_str).unwrap_or("")
    }

    #[test]
    fn bare_query_produces_only_the_join_stages() {
        let pipeline = joined_list_pipeline(&ListQuery::default());

        let names: Vec<&str> = pipeline.iter().map(stage_name).collect();
        assert_eq!(names, ["$lookup", "$unwind", "$lookup", "$unwind"]);
    }

    #[test]
    fn first_lookup_joins_species_on_the_id_string() {
        let pipeline = joined_list_pipeline(&ListQuery::default());

        let lookup = pipeline[0].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), "species");
        assert_eq!(lookup.get_str("localField").unwrap(), "species");
        assert_eq!(lookup.get_str("foreignField").unwrap(), "_id");
        assert_eq!(lookup.get_str("as").unwrap(), "species");
    }

    #[test]
    fn second_lookup_joins_categories_through_the_species() {
        let pipeline = joined_list_pipeline(&ListQuery::default());

        let lookup = pipeline[2].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), "categories");
        assert_eq!(lookup.get_str("localField").unwrap(), "species.category");
        assert_eq!(lookup.get_str("as").unwrap(), "species.category");
    }

    #[test]
    fn unwinds_preserve_unmatched_rows() {
        let pipeline = joined_list_pipeline(&ListQuery::default());

        for index in [1, 3] {
            let unwind = pipeline[index].get_document("$unwind").unwrap();
            assert!(
                unwind.get_bool("preserveNullAndEmptyArrays").unwrap(),
                "stage {index} must keep rows whose join found nothing"
            );
        }
        assert_eq!(
            pipeline[1].get_document("$unwind").unwrap().get_str("path").unwrap(),
            "$species"
        );
        assert_eq!(
            pipeline[3].get_document("$unwind").unwrap().get_str("path").unwrap(),
            "$species.category"
        );
    }

    #[test]
    fn sort_stage_follows_the_joins() {
        let query = ListQuery {
            sort: Some(SortSpec {
                field: "name".to_string(),
                order: SortOrder::Desc,
            }),
            skip: None,
            limit: None,
        };

        let pipeline = joined_list_pipeline(&query);
        assert_eq!(pipeline.len(), 5);

        let sort = pipeline[4].get_document("$sort").unwrap();
        assert_eq!(sort.get_i32("name").unwrap(), -1);
    }

    #[test]
    fn pagination_stages_come_last() {
        let query = ListQuery {
            sort: Some(SortSpec {
                field: "name".to_string(),
                order: SortOrder::Asc,
            }),
            skip: Some(5),
            limit: Some(5),
        };

        let pipeline = joined_list_pipeline(&query);
        let names: Vec<&str> = pipeline.iter().map(stage_name).collect();
        assert_eq!(
            names,
            ["$lookup", "$unwind", "$lookup", "$unwind", "$sort", "$skip", "$limit"]
        );

        assert_matches!(pipeline[5].get("$skip"), Some(Bson::Int64(5)));
        assert_matches!(pipeline[6].get("$limit"), Some(Bson::Int64(5)));
    }

    #[test]
    fn pagination_without_sort_skips_the_sort_stage() {
        let query = ListQuery {
            sort: None,
            skip: Some(10),
            limit: Some(2),
        };

        let pipeline = joined_list_pipeline(&query);
        let names: Vec<&str> = pipeline.iter().map(stage_name).collect();
        assert_eq!(
            names,
            ["$lookup", "$unwind", "$lookup", "$unwind", "$skip", "$limit"]
        );
    }
}
