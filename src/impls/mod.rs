pub mod search;
pub mod subtour;
