//! Property coverage for the index contract over small id domains, so the
//! generated operations actually collide on buckets and entities.

use crate::{
    db::index::ValueIndex,
    types::{EntityId, ModelId, PartitionId, TableId},
};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug)]
enum Op {
    Create {
        model: u64,
        table: u64,
        entity: u64,
        partition: u64,
    },
    Delete {
        model: u64,
        table: u64,
        entity: u64,
        partition: u64,
    },
}

fn arb_op() -> impl Strategy<Value = Op> {
    let slot = (0..2u64, 0..2u64, 0..8u64, 0..2u64);

    prop_oneof![
        slot.clone()
            .prop_map(|(model, table, entity, partition)| Op::Create {
                model,
                table,
                entity,
                partition,
            }),
        slot.prop_map(|(model, table, entity, partition)| Op::Delete {
            model,
            table,
            entity,
            partition,
        }),
    ]
}

fn apply(index: &mut ValueIndex, op: Op) {
    match op {
        Op::Create {
            model,
            table,
            entity,
            partition,
        } => {
            index.create(
                ModelId::new(model),
                TableId::new(table),
                EntityId::new(entity),
                PartitionId::new(partition),
            );
        }
        Op::Delete {
            model,
            table,
            entity,
            partition,
        } => {
            index.delete(
                ModelId::new(model),
                TableId::new(table),
                EntityId::new(entity),
                PartitionId::new(partition),
            );
        }
    }
}

proptest! {
    #[test]
    fn create_twice_changes_nothing(
        model in 0..4u64,
        table in 0..4u64,
        entity in any::<u64>(),
        partition in 0..4u64,
    ) {
        let mut index = ValueIndex::new();
        let (m, t, p) = (
            ModelId::new(model),
            TableId::new(table),
            PartitionId::new(partition),
        );

        index.create(m, t, EntityId::new(entity), p);
        let after_first = index.query(m, t, p);

        index.create(m, t, EntityId::new(entity), p);
        let after_second = index.query(m, t, p);

        prop_assert_eq!(after_first, after_second);
    }

    #[test]
    fn created_entity_never_leaks_into_sibling_partition(
        model in 0..4u64,
        table in 0..4u64,
        entity in any::<u64>(),
        partition in 0..4u64,
        sibling in 0..4u64,
    ) {
        prop_assume!(partition != sibling);

        let mut index = ValueIndex::new();
        let (m, t) = (ModelId::new(model), TableId::new(table));

        index.create(m, t, EntityId::new(entity), PartitionId::new(partition));

        prop_assert!(!index
            .query(m, t, PartitionId::new(sibling))
            .contains(&EntityId::new(entity)));
        prop_assert!(!index.exists(m, t, EntityId::new(entity), PartitionId::new(sibling)));
    }

    #[test]
    fn interleaved_ops_keep_buckets_duplicate_free(
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let mut index = ValueIndex::new();
        for op in ops {
            apply(&mut index, op);
        }

        prop_assert!(index.verify().is_ok());

        for (_, entities) in index.entries() {
            let unique: BTreeSet<_> = entities.iter().copied().collect();
            prop_assert_eq!(unique.len(), entities.len());
        }
    }

    #[test]
    fn interleaved_ops_match_a_set_model(
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let mut index = ValueIndex::new();
        let mut model_set: BTreeSet<(u64, u64, u64, u64)> = BTreeSet::new();

        for op in ops {
            apply(&mut index, op);
            match op {
                Op::Create { model, table, entity, partition } => {
                    model_set.insert((model, table, partition, entity));
                }
                Op::Delete { model, table, entity, partition } => {
                    model_set.remove(&(model, table, partition, entity));
                }
            }
        }

        // Membership agrees with the oracle; ordering is the index's own.
        for model in 0..2u64 {
            for table in 0..2u64 {
                for partition in 0..2u64 {
                    let queried: BTreeSet<u64> = index
                        .query(
                            ModelId::new(model),
                            TableId::new(table),
                            PartitionId::new(partition),
                        )
                        .into_iter()
                        .map(EntityId::get)
                        .collect();

                    let expected: BTreeSet<u64> = model_set
                        .iter()
                        .filter(|(m, t, p, _)| (*m, *t, *p) == (model, table, partition))
                        .map(|(_, _, _, e)| *e)
                        .collect();

                    prop_assert_eq!(queried, expected);
                }
            }
        }
    }

    #[test]
    fn delete_removes_exactly_one_slot_and_keeps_the_rest(
        entities in prop::collection::btree_set(any::<u64>(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut index = ValueIndex::new();
        let (m, t, p) = (ModelId::new(0), TableId::new(69), PartitionId::new(1));

        let entities: Vec<u64> = entities.into_iter().collect();
        for entity in &entities {
            index.create(m, t, EntityId::new(*entity), p);
        }

        let victim = entities[pick.index(entities.len())];
        index.delete(m, t, EntityId::new(victim), p);

        let remaining = index.query(m, t, p);
        prop_assert_eq!(remaining.len(), entities.len() - 1);
        prop_assert!(!remaining.contains(&EntityId::new(victim)));

        for entity in entities {
            if entity != victim {
                prop_assert!(index.exists(m, t, EntityId::new(entity), p));
            }
        }
    }
}
