mod completion;
mod loading;
