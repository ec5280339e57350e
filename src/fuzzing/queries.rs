use super::*;

qc!(all_less_specific, _all_less_specific);
fn _all_less_specific((list, query): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let want = model.select_values(|r| r.contains(&query) && *r != query);
    map.find_all_less_specific(&query)
        .into_iter()
        .copied()
        .eq(want)
}

qc!(exact_and_all_less_specific, _exact_and_all_less_specific);
fn _exact_and_all_less_specific(
    (list, query): (Vec<Operation<TestRange, i32>>, TestRange),
) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let want = model.select_values(|r| r.contains(&query));
    map.find_exact_and_all_less_specific(&query)
        .into_iter()
        .copied()
        .eq(want)
}

qc!(first_less_specific, _first_less_specific);
fn _first_less_specific((list, query): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let want = model
        .select_values(|r| r.contains(&query) && *r != query)
        .pop();
    map.find_first_less_specific(&query).copied() == want
}

qc!(exact_or_first_less_specific, _exact_or_first_less_specific);
fn _exact_or_first_less_specific(
    (list, query): (Vec<Operation<TestRange, i32>>, TestRange),
) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let want = model.select_values(|r| r.contains(&query)).pop();
    map.find_exact_or_first_less_specific(&query).copied() == want
}

qc!(all_more_specific, _all_more_specific);
fn _all_more_specific((list, query): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let want = model.select(|r| query.contains(r));
    map.more_specific(&query)
        .map(|(r, t)| (*r, *t))
        .eq(want.iter().copied())
        && map
            .find_all_more_specific(&query)
            .into_iter()
            .copied()
            .eq(want.iter().map(|(_, t)| *t))
}

qc!(first_more_specific, _first_more_specific);
fn _first_more_specific((list, query): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let inside = model.select(|r| query.contains(r) && *r != query);
    // keep only those that are not covered by another range with a value inside the query
    let want = inside
        .iter()
        .filter(|(r, _)| !inside.iter().any(|(o, _)| o != r && o.contains(r)))
        .map(|(_, t)| *t);
    map.find_first_more_specific(&query)
        .into_iter()
        .copied()
        .eq(want)
}

qc!(universe_query, _universe_query);
fn _universe_query(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    let universe = TestRange::universe();
    map.find_all_more_specific(&universe)
        .into_iter()
        .copied()
        .eq(model.select_values(|_| true))
        && map.find_all_less_specific(&universe).is_empty()
        && map.find_exact(&universe).is_none()
}
