// End-to-end tests: a dashboard backed by a JSON file store survives restarts
// and ranks what it persisted.

use leadmap::{
    Coordinate, Dashboard, FixedLocation, JsonFileStore, LeadError, LeadPatch, LeadStore,
    LocationInput, NewLead, NoLocation, RankOptions, Settings, SortKey, samples_around,
};

const HERE: Coordinate = Coordinate::new(40.7128, -74.0060);

fn manual(name: &str, score: &str, at: Coordinate) -> NewLead {
    NewLead {
        name: name.into(),
        score: score.into(),
        location: LocationInput::Manual {
            latitude: at.latitude.to_string(),
            longitude: at.longitude.to_string(),
        },
    }
}

#[test]
fn leads_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");

    let id = {
        let mut dash = Dashboard::open(JsonFileStore::new(&path), FixedLocation(HERE)).unwrap();
        for (name, at) in samples_around(&HERE) {
            dash.add(manual(name, "80", at)).unwrap();
        }
        dash.add(NewLead { name: "Me".into(), score: "99".into(), location: LocationInput::Current })
            .unwrap()
            .id
            .clone()
    };

    let mut dash = Dashboard::open(JsonFileStore::new(&path), FixedLocation(HERE)).unwrap();
    assert_eq!(dash.leads().len(), 4);
    assert_eq!(dash.get(&id).unwrap().location, HERE);

    // Re-adding a sample at its exact persisted position is still a duplicate.
    let (_, a) = samples_around(&HERE)[0];
    let err = dash.add(manual("Someone else", "50", a)).unwrap_err();
    assert!(matches!(err.downcast_ref::<LeadError>(), Some(LeadError::Duplicate(_))));

    dash.edit(&id, LeadPatch { score: Some(60), ..Default::default() }).unwrap();
    let first = dash.leads()[0].id.clone();
    dash.delete(&first).unwrap();

    let stored = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(stored, dash.leads());
    assert_eq!(stored.iter().find(|l| l.id == id).unwrap().score, 60);
}

#[test]
fn settings_drive_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    let mut dash = Dashboard::open(JsonFileStore::new(&path), FixedLocation(HERE)).unwrap();
    dash.add(manual("Close but weak", "65", HERE.offset(0.001, 0.0))).unwrap();
    dash.add(manual("Strong", "92", HERE.offset(0.05, 0.0))).unwrap();
    dash.add(manual("Close", "75", HERE.offset(0.002, 0.0))).unwrap();

    let settings = Settings::default();
    let names = |opts: &RankOptions| -> Vec<String> {
        dash.view(opts).iter().map(|r| r.lead.name.clone()).collect()
    };

    assert_eq!(names(&settings.rank_options()), ["Strong", "Close"]);

    let nearest_first = Settings { sort_by: SortKey::Distance, filter_high_score: false, ..Settings::default() };
    assert_eq!(names(&nearest_first.rank_options()), ["Close but weak", "Close", "Strong"]);
}

#[test]
fn dashboard_without_location_still_lists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    {
        let mut dash = Dashboard::open(JsonFileStore::new(&path), FixedLocation(HERE)).unwrap();
        dash.add(manual("Acme", "80", HERE.offset(0.1, 0.1))).unwrap();
    }

    let dash = Dashboard::open(JsonFileStore::new(&path), NoLocation).unwrap();
    assert!(dash.reference().is_none());
    let ranking = dash.view(&RankOptions::new(SortKey::Distance, None));
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.best().unwrap().distance_km, 0.0);
}
