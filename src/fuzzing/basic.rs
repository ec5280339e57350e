use super::*;

qc!(new, _new);
fn _new(list: Vec<(TestRange, i32)>) -> bool {
    let mut map = IntervalMap::new();
    let mut model = Model::default();

    for (r, t) in list {
        if map.insert(r, t).ok() != model.insert(r, t) {
            return false;
        }
    }

    // assert that the iterator of both is the same
    map.into_iter().eq(model.select(|_| true))
}

qc!(new_mods, _new_mods);
fn _new_mods(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };
    map.iter().map(|(r, t)| (*r, *t)).eq(model.select(|_| true))
        && map.len() == model.len()
        && map.is_empty() == (model.len() == 0)
}

qc!(exact, _exact);
fn _exact((list, query): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((mut map, model)) = apply(list) else {
        return false;
    };
    let want = model.get(&query).copied();
    map.find_exact(&query).copied() == want
        && map.contains_key(&query) == want.is_some()
        && map.find_exact_mut(&query).map(|x| *x) == want
}

qc!(structure, _structure);
fn _structure(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((map, _)) = apply(list) else {
        return false;
    };
    let mut values = 0;
    let mut stack = vec![0];
    while let Some(cur) = stack.pop() {
        let node = &map.table[cur];
        values += node.value.is_some() as usize;
        for (i, c) in node.children.iter().enumerate() {
            let child = &map.table[*c].range;
            // strictly contained in the parent
            if !node.range.contains(child) || node.range.same_bounds(child) {
                return false;
            }
            // sorted and disjoint
            if let Some(next) = node.children.get(i + 1) {
                if child.end() >= map.table[*next].range.start() {
                    return false;
                }
            }
        }
        stack.extend(node.children.iter().copied());
    }
    values == map.len()
}

qc!(equality, _equality);
fn _equality(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((map, model)) = apply(list) else {
        return false;
    };

    // insert the entries in a different order, without any placeholders
    let mut entries = model.select(|_| true);
    entries.reverse();
    let Ok(rebuilt) = IntervalMap::try_from_iter(entries) else {
        return false;
    };

    map == rebuilt && map.clone() == map
}

qc!(insert_is_atomic, _insert_is_atomic);
fn _insert_is_atomic((list, range): (Vec<Operation<TestRange, i32>>, TestRange)) -> bool {
    let Some((mut map, _)) = apply(list) else {
        return false;
    };
    let before = map.clone();
    match map.insert(range, i32::MIN) {
        Ok(_) => true,
        Err(Error::ConflictingRange { .. }) => map == before && map.len() == before.len(),
        Err(_) => false,
    }
}

qc!(remove_all, _remove_all);
fn _remove_all(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((mut map, model)) = apply(list) else {
        return false;
    };
    for (r, t) in model.select(|_| true) {
        if map.remove(&r) != Some(t) {
            return false;
        }
    }
    map.is_empty() && map.iter().next().is_none()
}

qc!(clear, _clear);
fn _clear(list: Vec<Operation<TestRange, i32>>) -> bool {
    let Some((mut map, _)) = apply(list) else {
        return false;
    };
    map.clear();
    map.is_empty() && map.iter().next().is_none() && map.table.len() == 1
}
