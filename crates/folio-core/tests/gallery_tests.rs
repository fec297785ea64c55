//! Gallery presenters driven by a catalog over the fixture site

mod common;

use std::sync::{Arc, Mutex};

use common::fixtures::{dir_transport, memory_transport, ALL_RESOURCES};
use folio_core::domain::{CertificationKind, Locale};
use folio_core::filter::SortOrder;
use folio_core::gallery::{CertificationGallery, Gallery, ProjectGallery};
use folio_core::loader::Catalog;
use folio_tags::{CertificationTag, MatchMode, ProjectCategory, TechCategory};

fn visible_titles<I: folio_core::Catalogued>(gallery: &Gallery<I>) -> Vec<String> {
    gallery
        .visible()
        .iter()
        .map(|item| item.title().to_string())
        .collect()
}

async fn project_gallery() -> ProjectGallery {
    let catalog = Catalog::new(dir_transport());
    let mut gallery = Gallery::new(Locale::En);
    gallery.begin_load(Locale::En);
    let projects = catalog.load_projects(Locale::En).await;
    assert!(gallery.finish_load(Locale::En, projects));
    gallery
}

#[tokio::test]
async fn test_project_gallery_defaults_to_latest() {
    let gallery = project_gallery().await;
    assert!(!gallery.is_loading());
    assert_eq!(
        visible_titles(&gallery),
        vec!["asteroid field", "Digit Recognizer", "Écoles Map", "Weather Now"]
    );
}

#[tokio::test]
async fn test_title_sort_folds_accents_and_case() {
    let mut gallery = project_gallery().await;
    gallery.set_sort(SortOrder::TitleAsc);
    assert_eq!(
        visible_titles(&gallery),
        vec!["asteroid field", "Digit Recognizer", "Écoles Map", "Weather Now"]
    );
    gallery.set_sort(SortOrder::TitleDesc);
    assert_eq!(
        visible_titles(&gallery),
        vec!["Weather Now", "Écoles Map", "Digit Recognizer", "asteroid field"]
    );
    assert_eq!(gallery.sort_label_key(), "projectsGallery.sort.titleDesc");
}

#[tokio::test]
async fn test_search_matches_title_only() {
    let mut gallery = project_gallery().await;
    gallery.set_search("  DIGIT ");
    assert_eq!(visible_titles(&gallery), vec!["Digit Recognizer"]);

    // Present in a description, not a title.
    gallery.set_search("offline");
    assert!(gallery.visible().is_empty());
}

#[tokio::test]
async fn test_category_modes() {
    let mut gallery = project_gallery().await;
    gallery.toggle_category(ProjectCategory::Web);
    gallery.toggle_category(ProjectCategory::Data);
    assert_eq!(
        visible_titles(&gallery),
        vec!["Digit Recognizer", "Écoles Map"]
    );

    gallery.set_category_mode(MatchMode::All);
    assert_eq!(visible_titles(&gallery), vec!["Écoles Map"]);

    gallery.toggle_category(ProjectCategory::Data);
    assert!(!gallery.is_category_selected(ProjectCategory::Data));
    assert_eq!(
        visible_titles(&gallery),
        vec!["Digit Recognizer", "Écoles Map"]
    );
}

#[tokio::test]
async fn test_technology_category_filter() {
    let mut gallery = project_gallery().await;
    gallery.toggle_metadata_category(TechCategory::AiMl);
    assert!(gallery.is_metadata_category_selected(TechCategory::AiMl));
    assert_eq!(visible_titles(&gallery), vec!["Digit Recognizer"]);

    gallery.toggle_metadata_category(TechCategory::Devops);
    assert_eq!(
        visible_titles(&gallery),
        vec!["Digit Recognizer", "Weather Now"]
    );

    gallery.reset();
    assert_eq!(gallery.visible().len(), 4);
    assert!(!gallery.has_active_filters());
}

#[tokio::test]
async fn test_technology_name_filter() {
    let mut gallery = project_gallery().await;
    gallery.toggle_metadata_name("tensorflow");
    assert_eq!(visible_titles(&gallery), vec!["Digit Recognizer"]);

    gallery.toggle_metadata_name("Angular");
    assert_eq!(
        visible_titles(&gallery),
        vec!["Digit Recognizer", "Écoles Map"]
    );

    // Named in the resource but missing from the technology list.
    gallery.reset();
    gallery.toggle_metadata_name("X");
    assert!(gallery.visible().is_empty());
}

#[tokio::test]
async fn test_certification_gallery_filters() {
    let catalog = Catalog::new(dir_transport());
    let certifications = catalog.load_certifications(Locale::En).await;
    let mut gallery: CertificationGallery = Gallery::with_items(Locale::En, certifications);

    gallery.set_search("datacamp");
    assert_eq!(visible_titles(&gallery), vec!["Data Scientist with Python"]);
    gallery.set_search("");

    gallery.toggle_category(CertificationTag::Python);
    assert_eq!(
        visible_titles(&gallery),
        vec!["Deep Learning Specialization", "Data Scientist with Python"]
    );

    gallery.set_kind(Some(CertificationKind::Standalone));
    assert_eq!(visible_titles(&gallery), vec!["Deep Learning Specialization"]);

    gallery.set_sort_str("oldest");
    gallery.clear_categories();
    assert_eq!(
        visible_titles(&gallery),
        vec!["CCNA: Introduction to Networks", "Deep Learning Specialization"]
    );
}

#[tokio::test]
async fn test_locale_switch_reloads_gallery() {
    let catalog = Catalog::new(memory_transport(ALL_RESOURCES));
    let gallery = Arc::new(Mutex::new(ProjectGallery::new(Locale::En)));

    let projects = catalog.load_projects(Locale::En).await;
    gallery.lock().unwrap().finish_load(Locale::En, projects);
    gallery.lock().unwrap().toggle_category(ProjectCategory::Mobile);

    let g = Arc::clone(&gallery);
    catalog.subscribe(move |change| g.lock().unwrap().on_locale_change(change));

    catalog.set_locale(Locale::Fr);
    {
        let gallery = gallery.lock().unwrap();
        assert!(gallery.is_loading());
        assert_eq!(gallery.locale(), Locale::Fr);
        assert!(gallery.visible().is_empty());
    }

    let projects = catalog.load_projects(catalog.locale()).await;
    let mut gallery = gallery.lock().unwrap();
    assert!(gallery.finish_load(Locale::Fr, projects));
    assert_eq!(visible_titles(&gallery), vec!["Météo Maintenant"]);
}

#[tokio::test]
async fn test_late_result_for_previous_locale_is_ignored() {
    let catalog = Catalog::new(memory_transport(ALL_RESOURCES));
    let mut gallery = ProjectGallery::new(Locale::En);

    // English load starts, user switches to French before it lands.
    gallery.begin_load(Locale::En);
    let english = catalog.load_projects(Locale::En).await;
    gallery.begin_load(Locale::Fr);
    let french = catalog.load_projects(Locale::Fr).await;

    assert!(gallery.finish_load(Locale::Fr, french));
    assert!(!gallery.finish_load(Locale::En, english));
    assert_eq!(gallery.items().len(), 2);
    assert_eq!(gallery.locale(), Locale::Fr);
}
