use indoc::indoc;

use reach::config::CostOrder;
use reach::config::SearchOrder;
use reach::config::StateSpace;
use reach::problems::crossing;
use reach::problems::crossing::CrossingState;
use reach::problems::family;
use reach::problems::family::CostProfile;
use reach::problems::family::FamilySpace;
use reach::problems::family::FamilyState;
use reach::problems::family::Person;
use reach::problems::family::PersonPos;
use reach::space::Path;
use reach::space::Space;

#[test]
fn crossing_breadth_first_takes_the_cabbage_second() {
    let paths = crossing::state_space().check(crossing::goal, SearchOrder::BreadthFirst);
    assert_eq!(
        paths[0].to_string(),
        indoc! {"
            0: 1111
            1: 2121
            2: 1121
            3: 2221
            4: 1211
            5: 2212
            6: 1212
            7: 2222
        "}
    );
}

#[test]
fn crossing_depth_first_takes_the_wolf_second() {
    let space = crossing::state_space();
    let mut search = space.search(crossing::goal, SearchOrder::DepthFirst);
    let first = search.next().unwrap();
    assert_eq!(
        first.to_string(),
        indoc! {"
            0: 1111
            1: 2121
            2: 1121
            3: 2122
            4: 1112
            5: 2212
            6: 1212
            7: 2222
        "}
    );
}

#[test]
fn crossing_never_leaves_anyone_in_danger() {
    let space = crossing::state_space();
    for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
        let paths = space.check(crossing::goal, order);
        assert!(!paths.is_empty());
        for p in &paths {
            assert_eq!(*p.start(), CrossingState::default());
            assert_eq!(p.end().to_string(), "2222");
            assert!(p.iter().all(CrossingState::is_safe), "{p}");
            assert!(space.space().valid_path(p));
        }
    }
}

fn waiting_on_shore1(p: &Path<FamilyState>, person: Person) -> usize {
    p.iter()
        .filter(|s| s.pos(person) == PersonPos::Shore1)
        .count()
}

#[test]
fn family_solutions_respect_the_boat() {
    for profile in CostProfile::ALL {
        for order in [CostOrder::Ascending, CostOrder::Descending] {
            let space = family::state_space(profile).with_order(order);
            let paths = space.check(family::goal);

            assert!(!paths.is_empty(), "{profile} {order}");
            for p in &paths {
                assert!(family::goal(p.end()));
                assert!(p.iter().all(|s| s.boat.passengers <= 2), "{profile} {order}");
                assert!(space.space().valid_path(p));
            }
        }
    }
}

#[test]
fn family_depth_profile_is_shortest_first() {
    let shortest = StateSpace::new(FamilyState::default(), FamilySpace::default())
        .check(family::goal, SearchOrder::BreadthFirst)[0]
        .len();

    let space = family::state_space(CostProfile::Depth);
    let mut search = space.search(family::goal);
    let (path, cost) = search.find_next_goal_with_cost().unwrap();
    assert_eq!(path.len(), shortest);
    assert_eq!(cost.depth, shortest);
    assert_eq!(cost.noise, 0);
}

#[test]
fn family_noise_profiles_prefer_a_son() {
    let son1_first = family::state_space(CostProfile::Son1First)
        .search(family::goal)
        .next()
        .unwrap();
    assert!(
        waiting_on_shore1(&son1_first, Person::Son1) <= waiting_on_shore1(&son1_first, Person::Son2)
    );

    let son2_first = family::state_space(CostProfile::Son2First)
        .search(family::goal)
        .next()
        .unwrap();
    assert!(
        waiting_on_shore1(&son2_first, Person::Son2) <= waiting_on_shore1(&son2_first, Person::Son1)
    );
}
