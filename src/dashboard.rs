use anyhow::Result;
use tracing::{info, warn};

use crate::{
    error::LeadError,
    geodesy::Coordinate,
    lead::{find_duplicate, Candidate, LeadId, LeadRecord, MAX_SCORE},
    location::LocationProvider,
    rank::{rank, NearbyIndex, RankOptions, RankedLead, Ranking},
    store::LeadStore,
};

/// Where a new lead's position comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationInput {
    /// Ask the location provider.
    Current,
    /// Coordinates typed into the form.
    Manual { latitude: String, longitude: String },
}

/// The add-lead form, as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub score: String,
    pub location: LocationInput,
}

/// Fields to overwrite on an existing lead; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub score: Option<u8>,
    pub location: Option<Coordinate>,
}

fn invalid(msg: impl Into<String>) -> anyhow::Error {
    LeadError::InvalidInput(msg.into()).into()
}

/// Keep a provider's own `LeadError`; anything else becomes `LocationUnavailable`.
fn location_error(err: anyhow::Error) -> anyhow::Error {
    match err.downcast::<LeadError>() {
        Ok(lead_err) => lead_err.into(),
        Err(err) => LeadError::LocationUnavailable(format!("{err:#}")).into(),
    }
}

fn parse_score(score: &str) -> Result<u8> {
    let score = score.trim();
    if score.is_empty() {
        return Err(invalid("Enter a match score"));
    }
    let value: u8 = score.parse().map_err(|_| invalid(format!("Match score must be 0-{MAX_SCORE}, got {score:?}")))?;
    check_score(value)?;
    Ok(value)
}

fn check_score(score: u8) -> Result<()> {
    if score > MAX_SCORE {
        return Err(invalid(format!("Match score must be 0-{MAX_SCORE}, got {score}")));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("Enter a name"));
    }
    Ok(name.to_string())
}

/// The lead dashboard: owns the working copy of the leads, persists every change,
/// and ranks on demand against the current position.
pub struct Dashboard<S: LeadStore, L: LocationProvider> {
    store: S,
    location: L,
    leads: Vec<LeadRecord>,
}

impl<S: LeadStore, L: LocationProvider> Dashboard<S, L> {
    /// Load the stored leads.
    pub fn open(store: S, location: L) -> Result<Self> {
        let leads = store.load()?;
        Ok(Self { store, location, leads })
    }

    /// Leads in stored order.
    #[inline] pub fn leads(&self) -> &[LeadRecord] { &self.leads }

    #[inline] pub fn store(&self) -> &S { &self.store }

    /// Look up a lead by id.
    pub fn get(&self, id: &LeadId) -> Option<&LeadRecord> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    fn position_of(&self, id: &LeadId) -> Result<usize> {
        self.leads.iter()
            .position(|lead| &lead.id == id)
            .ok_or_else(|| LeadError::NotFound(id.to_string()).into())
    }

    /// The current position, or `None` (logged) when it is unavailable.
    pub fn reference(&self) -> Option<Coordinate> {
        match self.location.current_position() {
            Ok(coord) => Some(coord),
            Err(err) => {
                warn!("location unavailable, distances will read 0: {err:#}");
                None
            }
        }
    }

    /// Persist `leads` and adopt them as the working copy. Nothing changes if saving fails.
    fn commit(&mut self, leads: Vec<LeadRecord>) -> Result<()> {
        self.store.save(&leads)?;
        self.leads = leads;
        Ok(())
    }

    fn fresh_id(&self) -> LeadId {
        loop {
            let id = LeadId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Validate the form, reject duplicates, assign an id, append and save.
    pub fn add(&mut self, new: NewLead) -> Result<&LeadRecord> {
        let name = check_name(&new.name)?;
        let score = parse_score(&new.score)?;

        let location = match &new.location {
            LocationInput::Current => self.location.current_position().map_err(location_error)?,
            LocationInput::Manual { latitude, longitude } => Coordinate::parse_pair(latitude, longitude)
                .map_err(|err| invalid(format!("{err:#}")))?,
        };

        if let Some(existing) = find_duplicate(&Candidate::new(&name, location), &self.leads) {
            return Err(LeadError::Duplicate(format!("matches {:?} ({})", existing.name, existing.id)).into());
        }

        let lead = LeadRecord::new(self.fresh_id(), name, location, score);
        info!(id = %lead.id, name = %lead.name, score = lead.score, "adding lead");

        let mut leads = self.leads.clone();
        leads.push(lead);
        self.commit(leads)?;
        Ok(&self.leads[self.leads.len() - 1])
    }

    /// Merge `patch` into the lead with `id` and save.
    ///
    /// The result may not collide (same name or exact location) with any *other* lead.
    pub fn edit(&mut self, id: &LeadId, patch: LeadPatch) -> Result<&LeadRecord> {
        let idx = self.position_of(id)?;

        let mut updated = self.leads[idx].clone();
        if let Some(name) = &patch.name {
            updated.name = check_name(name)?;
        }
        if let Some(score) = patch.score {
            check_score(score)?;
            updated.score = score;
        }
        if let Some(location) = patch.location {
            if !location.is_valid() {
                return Err(invalid(format!("Coordinate out of range: {location}")));
            }
            updated.location = location;
        }

        let others: Vec<LeadRecord> = self.leads.iter()
            .filter(|lead| &lead.id != id)
            .cloned()
            .collect();
        if let Some(existing) = find_duplicate(&updated.as_candidate(), &others) {
            return Err(LeadError::Duplicate(format!("matches {:?} ({})", existing.name, existing.id)).into());
        }

        info!(id = %id, "editing lead");
        let mut leads = self.leads.clone();
        leads[idx] = updated;
        self.commit(leads)?;
        Ok(&self.leads[idx])
    }

    /// Remove the lead with `id` and save. Returns the removed record.
    pub fn delete(&mut self, id: &LeadId) -> Result<LeadRecord> {
        let idx = self.position_of(id)?;

        let mut leads = self.leads.clone();
        let removed = leads.remove(idx);
        self.commit(leads)?;

        info!(id = %removed.id, name = %removed.name, "deleted lead");
        Ok(removed)
    }

    /// Rank the leads against the current position.
    pub fn view(&self, opts: &RankOptions) -> Ranking<'_> {
        rank(&self.leads, self.reference().as_ref(), opts)
    }

    /// Leads within `radius_km` of the current position, nearest first.
    pub fn nearby(&self, radius_km: f64) -> Result<Vec<RankedLead<'_>>> {
        let here = self.location.current_position()?;
        Ok(NearbyIndex::new(&self.leads).within_radius(&here, radius_km))
    }
}
