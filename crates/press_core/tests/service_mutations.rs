use press_core::{
    AuthorId, InMemoryPublicationRepository, PublicationRepository, PublicationService, RepoError,
    ValidationError,
};

fn service() -> PublicationService<InMemoryPublicationRepository> {
    PublicationService::new(InMemoryPublicationRepository::new())
}

#[test]
fn invalid_construction_registers_nothing() {
    let mut service = service();

    assert_eq!(
        service.create_author("").unwrap_err(),
        RepoError::Validation(ValidationError::EmptyAuthorName)
    );
    assert!(matches!(
        service.create_magazine("X", "Tech").unwrap_err(),
        RepoError::Validation(ValidationError::MagazineNameLength { chars: 1 })
    ));

    let repo = service.repository();
    assert!(repo.list_authors().is_empty());
    assert!(repo.list_magazines().is_empty());
}

#[test]
fn rename_magazine_rejects_invalid_name_and_keeps_previous() {
    let mut service = service();
    let magazine = service.create_magazine("AB", "Tech").unwrap();

    let err = service.rename_magazine(magazine.id(), "A").unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::MagazineNameLength { chars: 1 })
    );
    let stored = service.repository().get_magazine(magazine.id()).unwrap();
    assert_eq!(stored.name(), "AB");

    let renamed = service.rename_magazine(magazine.id(), "ABC").unwrap();
    assert_eq!(renamed.name(), "ABC");
    let stored = service.repository().get_magazine(magazine.id()).unwrap();
    assert_eq!(stored.name(), "ABC");
}

#[test]
fn recategorize_magazine_updates_topic_areas() {
    let mut service = service();
    let author = service.create_author("Carly Chaikin").unwrap();
    let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
    service
        .add_article(author.id(), magazine.id(), "Runway report")
        .unwrap();

    assert!(service.recategorize_magazine(magazine.id(), "").is_err());
    assert_eq!(service.topic_areas(author.id()).unwrap(), vec!["Fashion"]);

    service
        .recategorize_magazine(magazine.id(), "Lifestyle")
        .unwrap();
    assert_eq!(service.topic_areas(author.id()).unwrap(), vec!["Lifestyle"]);
}

#[test]
fn reassign_article_moves_relationships() {
    let mut service = service();
    let carly = service.create_author("Carly Chaikin").unwrap();
    let rami = service.create_author("Rami Malek").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Tech").unwrap();
    let article = service
        .add_article(carly.id(), vogue.id(), "Hacking the runway")
        .unwrap();

    service
        .reassign_article_author(article.id(), rami.id())
        .unwrap();
    service
        .reassign_article_magazine(article.id(), wired.id())
        .unwrap();

    assert!(service.author_articles(carly.id()).unwrap().is_empty());
    assert_eq!(service.author_articles(rami.id()).unwrap().len(), 1);
    assert!(service.magazine_articles(vogue.id()).unwrap().is_empty());
    assert_eq!(
        service.article_titles(wired.id()).unwrap(),
        vec!["Hacking the runway"]
    );
}

#[test]
fn reassign_to_unknown_author_keeps_previous_reference() {
    let mut service = service();
    let author = service.create_author("Carly Chaikin").unwrap();
    let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
    let article = service
        .add_article(author.id(), magazine.id(), "Staying put")
        .unwrap();

    let unknown = AuthorId::generate();
    assert_eq!(
        service
            .reassign_article_author(article.id(), unknown)
            .unwrap_err(),
        RepoError::AuthorNotFound(unknown)
    );

    let stored = service.repository().get_article(article.id()).unwrap();
    assert_eq!(stored.author(), author.id());
}

#[test]
fn create_article_with_unknown_references_fails() {
    let mut service = service();
    let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
    let unknown = AuthorId::generate();

    let err = service
        .create_article(unknown, magazine.id(), "Ghost written")
        .unwrap_err();
    assert_eq!(err, RepoError::AuthorNotFound(unknown));
    assert!(service.repository().list_articles().is_empty());
}
