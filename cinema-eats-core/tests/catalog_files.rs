use std::fs;

use cinema_eats_core::{CatalogError, catalog::Catalog};

const SMALL_CATALOG: &str = r#"{
  "scenes": [
    {
      "id": "toast-1",
      "movie": {
        "title": "Breakfast Club",
        "year": 1985,
        "genre": ["Comedy", "Drama"],
        "director": "John Hughes",
        "imdbId": "tt0088847",
        "studio": "A&M Films",
        "distributor": "Universal Pictures"
      },
      "scene": {
        "timestamp": "0:42:10",
        "description": "Lunch is unpacked in the library.",
        "foodItems": ["Sushi", "Cereal sandwich"],
        "thumbnailUrl": "images/club.jpg",
        "significance": "Food as character shorthand."
      },
      "food": {
        "cuisine": "American",
        "mealType": "Lunch",
        "difficulty": "Easy"
      }
    }
  ],
  "collections": [
    {
      "id": "eighties",
      "title": "Eighties",
      "description": "",
      "sceneIds": ["toast-1", "gone"]
    }
  ]
}"#;

#[test]
fn catalog_loads_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, SMALL_CATALOG).unwrap();

    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.featured().count(), 0);

    let scene = catalog.get("toast-1").unwrap();
    assert_eq!(scene.primary_food(), Some("Sushi"));
    assert_eq!(scene.scene.media.video_url, None);

    let members: Vec<_> = catalog
        .collection_scenes("eighties")
        .into_iter()
        .map(|scene| scene.id.as_str())
        .collect();
    assert_eq!(members, ["toast-1"]);
}

#[test]
fn malformed_documents_are_decode_errors() {
    let err = Catalog::from_json_str(r#"{ "scenes": [ { "id": 3 } ] }"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn missing_files_are_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
