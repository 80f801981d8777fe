//! Kern der Anwendung.
//!
//!   - `state`    : `RootState`, die aktive `View` und Alerts
//!   - `reducer`  : reine Zustandsübergänge (Action -> State + Effects)
//!   - `effects`  : deklaratives Effect / TaskKind Modell
//!   - `executor` : führt TaskKind asynchron gegen das Identity-Backend aus
//!   - `app`      : Eventloop, verbindet Tui, Reducer, Executor und Rendering
pub mod app;
pub mod effects;
pub mod executor;
pub mod reducer;
pub mod state;
