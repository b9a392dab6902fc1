//! Resting place for [Quake3Events]

use std::borrow::Cow;


/// The Quake 3 server events that matter for tracking game matches, as classified from raw log lines.\
/// Fields borrow from the log line whenever possible -- see [Quake3Events::into_owned()] to detach them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Quake3Events<'a> {
    /// A new game match has started
    InitGame,
    /// A player's info became available or was updated -- either introducing or renaming the player
    ClientUserinfoChanged {
        client_id: Cow<'a, str>,
        name: Cow<'a, str>,
    },
    /// A player was killed by another player -- or by themselves, if `killer_id` and `victim_id` are the same
    Kill {
        killer_id: Cow<'a, str>,
        victim_id: Cow<'a, str>,
        mean_of_death: Cow<'a, str>,
    },
    /// A player was killed by the environment: the `<world>` has no client id
    WorldKill {
        victim_id: Cow<'a, str>,
        mean_of_death: Cow<'a, str>,
    },
    /// Any other log line (connections, items, scores, comments, shutdowns...): has no effect on the matches
    Ignored,
}

impl Quake3Events<'_> {

    /// Detaches this event from the log line it was classified from
    pub fn into_owned(self) -> Quake3Events<'static> {
        match self {
            Quake3Events::InitGame => Quake3Events::InitGame,
            Quake3Events::ClientUserinfoChanged { client_id, name } => Quake3Events::ClientUserinfoChanged { client_id: own(client_id), name: own(name) },
            Quake3Events::Kill { killer_id, victim_id, mean_of_death } => Quake3Events::Kill { killer_id: own(killer_id), victim_id: own(victim_id), mean_of_death: own(mean_of_death) },
            Quake3Events::WorldKill { victim_id, mean_of_death } => Quake3Events::WorldKill { victim_id: own(victim_id), mean_of_death: own(mean_of_death) },
            Quake3Events::Ignored => Quake3Events::Ignored,
        }
    }

    /// The name of the event, as it appears in the log lines (or `"Ignored"`)
    pub fn event_name(&self) -> &'static str {
        match self {
            Quake3Events::InitGame                   => "InitGame",
            Quake3Events::ClientUserinfoChanged {..} => "ClientUserinfoChanged",
            Quake3Events::Kill {..}                  |
            Quake3Events::WorldKill {..}             => "Kill",
            Quake3Events::Ignored                    => "Ignored",
        }
    }
}

fn own(text: Cow<'_, str>) -> Cow<'static, str> {
    Cow::Owned(text.into_owned())
}
