mod essay_vm;

pub use essay_vm::{
    EssayRowVm, NotePanels, RowEffect, RowIntent, apply_row_intent, map_essay_rows,
};
