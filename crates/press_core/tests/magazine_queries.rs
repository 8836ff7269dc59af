use press_core::{
    Author, InMemoryPublicationRepository, Magazine, MagazineId, PublicationService, RepoError,
};

fn service() -> PublicationService<InMemoryPublicationRepository> {
    PublicationService::new(InMemoryPublicationRepository::new())
}

fn publish(
    service: &mut PublicationService<InMemoryPublicationRepository>,
    author: &Author,
    magazine: &Magazine,
    count: usize,
) {
    for index in 0..count {
        service
            .add_article(author.id(), magazine.id(), format!("Article number {index}"))
            .unwrap();
    }
}

#[test]
fn contributing_authors_need_more_than_two_articles() {
    for (count, expected) in [(0, false), (1, false), (2, false), (3, true), (10, true)] {
        let mut service = service();
        let author = service.create_author("Carly Chaikin").unwrap();
        let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
        publish(&mut service, &author, &magazine, count);

        let contributing = service.contributing_authors(magazine.id()).unwrap();
        assert_eq!(
            contributing.iter().any(|candidate| candidate.id() == author.id()),
            expected,
            "article count {count}"
        );
    }
}

#[test]
fn contributing_authors_counts_per_magazine_only() {
    let mut service = service();
    let prolific = service.create_author("Prolific").unwrap();
    let casual = service.create_author("Casual").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Tech").unwrap();

    publish(&mut service, &prolific, &vogue, 3);
    publish(&mut service, &casual, &vogue, 2);
    publish(&mut service, &casual, &wired, 2);

    let names: Vec<&str> = service
        .contributing_authors(vogue.id())
        .unwrap()
        .into_iter()
        .map(|author| author.name())
        .collect();
    assert_eq!(names, vec!["Prolific"]);
    assert!(service.contributing_authors(wired.id()).unwrap().is_empty());
}

#[test]
fn contributors_are_unique_in_first_seen_order() {
    let mut service = service();
    let first = service.create_author("First").unwrap();
    let second = service.create_author("Second").unwrap();
    let magazine = service.create_magazine("Time", "News").unwrap();

    publish(&mut service, &second, &magazine, 1);
    publish(&mut service, &first, &magazine, 2);
    publish(&mut service, &second, &magazine, 1);

    let names: Vec<&str> = service
        .contributors(magazine.id())
        .unwrap()
        .into_iter()
        .map(|author| author.name())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[test]
fn empty_magazine_returns_empty_collections() {
    let mut service = service();
    let magazine = service.create_magazine("Quiet", "Poetry").unwrap();

    assert!(service.magazine_articles(magazine.id()).unwrap().is_empty());
    assert!(service.contributors(magazine.id()).unwrap().is_empty());
    assert!(service.article_titles(magazine.id()).unwrap().is_empty());
    assert!(service.contributing_authors(magazine.id()).unwrap().is_empty());
    assert_eq!(service.article_count(magazine.id()).unwrap(), 0);
}

#[test]
fn top_publisher_is_none_without_articles() {
    let mut service = service();
    service.create_magazine("Vogue", "Fashion").unwrap();
    service.create_author("Carly Chaikin").unwrap();

    assert!(service.top_publisher().is_none());
}

#[test]
fn top_publisher_picks_strict_maximum() {
    let mut service = service();
    let author = service.create_author("Carly Chaikin").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Tech").unwrap();

    publish(&mut service, &author, &vogue, 1);
    publish(&mut service, &author, &wired, 2);

    assert_eq!(service.top_publisher().unwrap().id(), wired.id());
}

#[test]
fn top_publisher_tie_goes_to_first_registered() {
    let mut service = service();
    let author = service.create_author("Carly Chaikin").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Tech").unwrap();

    publish(&mut service, &author, &wired, 2);
    publish(&mut service, &author, &vogue, 2);

    assert_eq!(service.top_publisher().unwrap().id(), vogue.id());
}

#[test]
fn queries_for_unknown_magazine_return_not_found() {
    let service = service();
    let unknown = MagazineId::generate();

    assert_eq!(
        service.article_titles(unknown).unwrap_err(),
        RepoError::MagazineNotFound(unknown)
    );
    assert_eq!(
        service.contributing_authors(unknown).unwrap_err(),
        RepoError::MagazineNotFound(unknown)
    );
}
