use crate::machine::Machine;

/// Selects the machines named exactly `query`, keeping their order.
///
/// An empty query selects every machine, duplicates included. Matching is
/// case-sensitive and does no globbing.
pub fn filter_machines<'a, I>(machines: I, query: &str) -> Vec<&'a Machine>
where
    I: IntoIterator<Item = &'a Machine>,
{
    let machines = machines.into_iter();
    if query.is_empty() {
        return machines.collect();
    }

    let filtered: Vec<&Machine> = machines.filter(|m| m.name == query).collect();
    tracing::debug!("{} machines match '{}'", filtered.len(), query);

    filtered
}
