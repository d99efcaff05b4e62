//! Nearest-entity search and ally ranking
//!
//! All "closest to the ball" questions use field-unit distance. Ties keep
//! the first player in roster order; callers must tolerate that.

use super::geometry::distance;
use super::mapper::{region_distance, Mapper};
use super::snapshot::{Player, TurnView};

/// Allies sharing one distance to the ball.
#[derive(Debug, Clone, PartialEq)]
pub struct AllyGroup<'a> {
    pub distance: f64,
    pub allies: Vec<&'a Player>,
}

/// Opponent closest to the ball, or `None` for an empty roster.
pub fn nearest_opponent<'a>(view: &TurnView<'a>) -> Option<(f64, &'a Player)> {
    nearest_to_ball(view, view.opponents().iter())
}

/// Teammate closest to the ball, skipping `exclude_number` and the
/// goalkeeper.
pub fn nearest_teammate<'a>(view: &TurnView<'a>, exclude_number: u32) -> Option<(f64, &'a Player)> {
    nearest_to_ball(
        view,
        view.my_team()
            .iter()
            .filter(|p| p.number != exclude_number && !p.is_goalkeeper()),
    )
}

fn nearest_to_ball<'a>(
    view: &TurnView<'a>,
    players: impl Iterator<Item = &'a Player>,
) -> Option<(f64, &'a Player)> {
    let ball = view.ball().position;
    let mut best: Option<(f64, &'a Player)> = None;
    for player in players {
        let d = distance(player.position, ball);
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, player)),
        }
    }
    best
}

/// Teammates ordered by distance to the ball, grouped by equal distance.
///
/// The ball holder (whoever the ball says it is) and the goalkeeper are
/// never ranked.
pub fn ranked_allies<'a>(view: &TurnView<'a>) -> Vec<AllyGroup<'a>> {
    let ball = view.ball();
    let holder = ball.holder;

    let mut scored: Vec<(f64, &'a Player)> = view
        .my_team()
        .iter()
        .filter(|p| !p.is_goalkeeper())
        .filter(|p| !holder.is_some_and(|h| p.is(h.side, h.number)))
        .map(|p| (distance(p.position, ball.position), p))
        .collect();
    // stable: equal distances keep roster order
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut groups: Vec<AllyGroup<'a>> = Vec::new();
    for (d, player) in scored {
        match groups.last_mut() {
            Some(group) if group.distance == d => group.allies.push(player),
            _ => groups.push(AllyGroup {
                distance: d,
                allies: vec![player],
            }),
        }
    }
    groups
}

/// True while another teammate should contest the ball instead of `me`.
///
/// `me` claims the ball once at least `threshold` teammates (anyone but
/// `me`, the goalkeeper included) are strictly farther from it. The
/// threshold is capped at the number of those teammates so small rosters
/// still produce a claimant. The goalkeeper never claims through this check.
pub fn has_closer_teammate(view: &TurnView<'_>, me: &Player, threshold: usize) -> bool {
    if me.is_goalkeeper() {
        return true;
    }

    let ball = view.ball().position;
    let my_distance = distance(me.position, ball);

    let mut eligible = 0usize;
    let mut farther = 0usize;
    for mate in view
        .my_team()
        .iter()
        .filter(|p| p.number != me.number)
    {
        eligible += 1;
        if distance(mate.position, ball) > my_distance {
            farther += 1;
        }
    }

    farther < threshold.min(eligible)
}

/// Numbers of the two teammates whose regions are closest to the ball's
/// region. A player must be strictly closer to displace a slot, so ties go
/// to whoever was seen first.
pub fn closest_pair_by_region(view: &TurnView<'_>, mapper: &Mapper) -> [Option<u32>; 2] {
    let ball_region = mapper.region_from_point(view.ball().position);

    let mut first: Option<(f64, u32)> = None;
    let mut second: Option<(f64, u32)> = None;

    for player in view.my_team() {
        let region = mapper.region_from_point(player.position);
        let d = region_distance(&region, &ball_region);

        if first.map_or(true, |(fd, _)| d < fd) {
            second = first;
            first = Some((d, player.number));
        } else if second.map_or(true, |(sd, _)| d < sd) {
            second = Some((d, player.number));
        }
    }

    [first.map(|(_, n)| n), second.map(|(_, n)| n)]
}
